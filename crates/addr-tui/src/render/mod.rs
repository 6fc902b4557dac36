//! Main render/view function (View in TEA pattern)


use addr_app::{AppState, FormField};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, FormAreas};
use crate::theme::palette;
use crate::widgets::{
    FormHeader, LoadingPlaceholder, SelectList, StatusBar, SubmitButton, TextInput,
};

const FULL_ADDRESS_LABEL: &str = "Địa chỉ đầy đủ (điền bằng form bên dưới)";
const FULL_ADDRESS_PLACEHOLDER: &str = "_,_,_,_";
const SPECIFIC_ADDRESS_PLACEHOLDER: &str = "Nhập địa chỉ cụ thể.";

/// Render the complete UI. Pure: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(FormHeader::new(&state.profile_route), areas.header);

    if state.is_loading() {
        frame.render_widget(LoadingPlaceholder, areas.body);
    } else {
        render_form(frame, layout::create_form(areas.body), state);
    }

    frame.render_widget(StatusBar::new(state.notification.as_ref()), areas.status);
}

fn render_form(frame: &mut Frame, areas: FormAreas, state: &AppState) {
    for (field, area) in [
        (FormField::FullName, areas.full_name),
        (FormField::Email, areas.email),
        (FormField::PhoneNumber, areas.phone_number),
    ] {
        frame.render_widget(
            TextInput::new(field.label(), state.text_value(field)).focused(state.focus == field),
            area,
        );
    }

    // Read-only preview of the composite
    let full_address = state.form.full_address();
    frame.render_widget(
        TextInput::new(FULL_ADDRESS_LABEL, &full_address).placeholder(FULL_ADDRESS_PLACEHOLDER),
        areas.full_address,
    );

    frame.render_widget(
        SubmitButton::new(state.focus == FormField::Submit),
        areas.submit,
    );

    render_select(frame, areas.province, state, FormField::Province);
    render_select(frame, areas.district, state, FormField::District);
    render_select(frame, areas.ward, state, FormField::Ward);

    frame.render_widget(
        TextInput::new(
            FormField::SpecificAddress.label(),
            state.specific_address(),
        )
        .placeholder(SPECIFIC_ADDRESS_PLACEHOLDER)
        .focused(state.focus == FormField::SpecificAddress),
        areas.specific_address,
    );
}

fn render_select(frame: &mut Frame, area: Rect, state: &AppState, field: FormField) {
    let Some(level) = field.lookup_level() else {
        return;
    };
    let options = state.options(level);
    frame.render_widget(
        SelectList::new(field.label(), &options)
            .selected(state.selected_id(level))
            .cursor(state.cursor(level))
            .focused(state.focus == field),
        area,
    );
}
