//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use addr_core::{AddressForm, District, LookupItem, Province, Ward, DEFAULT_ADDRESS_DELIMITER};

use crate::config::Settings;

/// Whether the form can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Waiting for provinces, or re-fetching lists for an existing selection.
    /// The form is replaced by a placeholder.
    #[default]
    Loading,

    Ready,
}

/// Where the view is headed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    AddAddress,

    /// The customer profile; reaching it ends the view
    Profile,
}

/// Focusable controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    FullName,
    Email,
    PhoneNumber,
    Province,
    District,
    Ward,
    SpecificAddress,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::Province,
        FormField::District,
        FormField::Ward,
        FormField::SpecificAddress,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field in Tab order (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in Tab order (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FormField::FullName
                | FormField::Email
                | FormField::PhoneNumber
                | FormField::SpecificAddress
        )
    }

    pub fn is_select(self) -> bool {
        self.lookup_level().is_some()
    }

    pub fn lookup_level(self) -> Option<LookupLevel> {
        match self {
            FormField::Province => Some(LookupLevel::Province),
            FormField::District => Some(LookupLevel::District),
            FormField::Ward => Some(LookupLevel::Ward),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Tên người nhận",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Số điện thoại",
            FormField::Province => "Chọn tỉnh/Thành phố",
            FormField::District => "Chọn Huyện",
            FormField::Ward => "Chọn Xã",
            FormField::SpecificAddress => "Địa chỉ cụ thể",
            FormField::Submit => "Thêm địa chỉ mới",
        }
    }
}

/// One level of the cascading location selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupLevel {
    Province,
    District,
    Ward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Toast shown in the status bar until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Highlighted row of each select list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectCursors {
    pub province: usize,
    pub district: usize,
    pub ward: usize,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub form: AddressForm,

    pub provinces: Vec<Province>,
    pub districts: Vec<District>,
    pub wards: Vec<Ward>,

    pub phase: LoadPhase,
    pub route: Route,

    pub focus: FormField,
    pub cursors: SelectCursors,

    pub notification: Option<Notification>,

    /// Delimiter the completeness rule splits the composite on
    pub address_delimiter: String,
    pub toast_duration: Duration,
    /// Shown in the header hint and printed on exit
    pub profile_route: String,

    /// Ctrl+C: leave without navigating
    pub quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(&Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            form: AddressForm::default(),
            provinces: Vec::new(),
            districts: Vec::new(),
            wards: Vec::new(),
            phase: LoadPhase::Loading,
            route: Route::AddAddress,
            focus: FormField::default(),
            cursors: SelectCursors::default(),
            notification: None,
            address_delimiter: if settings.validation.address_delimiter.is_empty() {
                DEFAULT_ADDRESS_DELIMITER.to_string()
            } else {
                settings.validation.address_delimiter.clone()
            },
            toast_duration: settings.ui.toast_duration(),
            profile_route: settings.api.profile_route.clone(),
            quit_requested: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The view is done: either navigated away or asked to quit
    pub fn should_quit(&self) -> bool {
        self.quit_requested || self.route == Route::Profile
    }

    /// Current text of a text input
    pub fn text_value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.form.full_name,
            FormField::Email => &self.form.email,
            FormField::PhoneNumber => &self.form.phone_number,
            FormField::SpecificAddress => self.specific_address(),
            _ => "",
        }
    }

    /// The free-text part of the composite address
    pub fn specific_address(&self) -> &str {
        self.form
            .address
            .as_ref()
            .and_then(|parts| parts.specific.as_deref())
            .unwrap_or("")
    }

    pub fn selected_id(&self, level: LookupLevel) -> &str {
        match level {
            LookupLevel::Province => &self.form.province_id,
            LookupLevel::District => &self.form.district_id,
            LookupLevel::Ward => &self.form.ward_id,
        }
    }

    /// `(id, name)` rows of one select list
    pub fn options(&self, level: LookupLevel) -> Vec<(&str, &str)> {
        fn rows<T: LookupItem>(items: &[T]) -> Vec<(&str, &str)> {
            items.iter().map(|i| (i.id(), i.name())).collect()
        }
        match level {
            LookupLevel::Province => rows(&self.provinces),
            LookupLevel::District => rows(&self.districts),
            LookupLevel::Ward => rows(&self.wards),
        }
    }

    pub fn option_count(&self, level: LookupLevel) -> usize {
        match level {
            LookupLevel::Province => self.provinces.len(),
            LookupLevel::District => self.districts.len(),
            LookupLevel::Ward => self.wards.len(),
        }
    }

    pub fn cursor(&self, level: LookupLevel) -> usize {
        match level {
            LookupLevel::Province => self.cursors.province,
            LookupLevel::District => self.cursors.district,
            LookupLevel::Ward => self.cursors.ward,
        }
    }

    fn cursor_mut(&mut self, level: LookupLevel) -> &mut usize {
        match level {
            LookupLevel::Province => &mut self.cursors.province,
            LookupLevel::District => &mut self.cursors.district,
            LookupLevel::Ward => &mut self.cursors.ward,
        }
    }

    /// Move the highlight by `delta` rows, clamped to the list
    pub fn move_cursor(&mut self, level: LookupLevel, delta: isize) {
        let count = self.option_count(level);
        let cursor = self.cursor_mut(level);
        if count == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(count - 1);
    }

    /// Put the highlight on the selected row, or the first row
    pub fn sync_cursor(&mut self, level: LookupLevel) {
        let selected = self
            .options(level)
            .iter()
            .position(|(id, _)| *id == self.selected_id(level))
            .unwrap_or(0);
        *self.cursor_mut(level) = selected;
    }

    /// Id of the highlighted row
    pub fn highlighted_id(&self, level: LookupLevel) -> Option<String> {
        self.options(level)
            .get(self.cursor(level))
            .map(|(id, _)| id.to_string())
    }

    pub fn show_notification(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }

    /// Drop the toast once it has been up long enough; returns true if one
    /// was removed
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.toast_duration));
        if expired {
            self.notification = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addr_core::AddressParts;

    #[test]
    fn test_new_state_is_loading() {
        let state = AppState::new();
        assert!(state.is_loading());
        assert_eq!(state.route, Route::AddAddress);
        assert_eq!(state.focus, FormField::FullName);
        assert_eq!(state.form.full_address(), "");
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_copies_ui_and_validation() {
        let mut settings = Settings::default();
        settings.validation.address_delimiter = ",".into();
        settings.ui.toast_duration_ms = 250;
        settings.api.profile_route = "/me".into();

        let state = AppState::with_settings(&settings);
        assert_eq!(state.address_delimiter, ",");
        assert_eq!(state.toast_duration, Duration::from_millis(250));
        assert_eq!(state.profile_route, "/me");
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(FormField::FullName.next(), FormField::Email);
        assert_eq!(FormField::Ward.next(), FormField::SpecificAddress);
        assert_eq!(FormField::Submit.next(), FormField::FullName);
        assert_eq!(FormField::FullName.prev(), FormField::Submit);
        assert_eq!(FormField::Province.prev(), FormField::PhoneNumber);
    }

    #[test]
    fn test_field_kinds() {
        assert!(FormField::SpecificAddress.is_text_input());
        assert!(!FormField::SpecificAddress.is_select());
        assert!(FormField::District.is_select());
        assert!(!FormField::Submit.is_text_input());
        assert!(!FormField::Submit.is_select());
    }

    #[test]
    fn test_should_quit_on_profile_route() {
        let mut state = AppState::new();
        state.route = Route::Profile;
        assert!(state.should_quit());
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut state = AppState::new();
        state.provinces = vec![Province::new("01", "Hà Nội"), Province::new("79", "HCM")];

        state.move_cursor(LookupLevel::Province, -1);
        assert_eq!(state.cursors.province, 0);
        state.move_cursor(LookupLevel::Province, 5);
        assert_eq!(state.cursors.province, 1);
        assert_eq!(state.highlighted_id(LookupLevel::Province).as_deref(), Some("79"));

        state.move_cursor(LookupLevel::Ward, 1);
        assert_eq!(state.cursors.ward, 0);
        assert_eq!(state.highlighted_id(LookupLevel::Ward), None);
    }

    #[test]
    fn test_sync_cursor_follows_selection() {
        let mut state = AppState::new();
        state.districts = vec![District::new("001", "A"), District::new("002", "B")];
        state.form.district_id = "002".into();
        state.sync_cursor(LookupLevel::District);
        assert_eq!(state.cursors.district, 1);

        state.form.district_id = "999".into();
        state.sync_cursor(LookupLevel::District);
        assert_eq!(state.cursors.district, 0);
    }

    #[test]
    fn test_specific_address_reads_parts() {
        let mut state = AppState::new();
        assert_eq!(state.text_value(FormField::SpecificAddress), "");

        state.form.address = Some(AddressParts::default().with_specific("5 Hàng Bài"));
        assert_eq!(state.text_value(FormField::SpecificAddress), "5 Hàng Bài");
    }

    #[test]
    fn test_notification_expires() {
        let mut state = AppState::new();
        state.toast_duration = Duration::from_millis(100);
        state.show_notification(NotificationLevel::Error, "x");

        let created = state.notification.as_ref().unwrap().created_at;
        assert!(!state.expire_notification(created + Duration::from_millis(50)));
        assert!(state.notification.is_some());
        assert!(state.expire_notification(created + Duration::from_millis(100)));
        assert!(state.notification.is_none());
    }
}
