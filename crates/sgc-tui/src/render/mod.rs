//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;
use sgc_app::form::CheckIndicator;
use sgc_app::state::AppState;
use sgc_app::Route;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::Sidebar::new(&state.settings.root_title, state.route),
        areas.sidebar,
    );

    match state.route {
        Route::Accounts => {
            frame.render_widget(widgets::account_table(&state.accounts), areas.content)
        }
        Route::Jobs => frame.render_widget(widgets::job_table(&state.jobs), areas.content),
        Route::Templates => {
            frame.render_widget(widgets::template_table(&state.templates), areas.content)
        }
        Route::Logs => frame.render_widget(widgets::LogPanel::new(&state.logs), areas.content),
        Route::AccountEdit => frame.render_widget(account_form(state), areas.content),
        Route::JobEdit => frame.render_widget(job_form(state), areas.content),
        Route::TemplateEdit => frame.render_widget(template_form(state), areas.content),
    }

    frame.render_widget(widgets::KeyHints::new(state.route), areas.footer);
    frame.render_widget(widgets::Toasts::new(&state.notifications), areas.content);

    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
}

fn check_line(label: &'static str, indicator: CheckIndicator) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), styles::text_secondary()),
        Span::styled(indicator.label(), styles::check_indicator(indicator)),
    ])
}

fn saving_line() -> Line<'static> {
    Line::from(Span::styled("  Saving...", styles::accent()))
}

fn account_form(state: &AppState) -> widgets::FormView<'_> {
    let form = &state.account_edit;
    let title = if form.is_edit() {
        "Edit Account"
    } else {
        "New Account"
    };
    let mut view = widgets::FormView::new(title, form.rows())
        .status_line(check_line("Connectivity", form.connectivity));
    if form.submitting {
        view = view.status_line(saving_line());
    }
    view
}

fn job_form(state: &AppState) -> widgets::FormView<'_> {
    let form = &state.job_edit;
    let title = if form.is_edit() { "Edit Job" } else { "New Job" };

    let template_line = match form.applied_template.and_then(|i| form.templates.get(i)) {
        Some(template) => Line::from(vec![
            Span::styled("  Template: ", styles::text_secondary()),
            Span::styled(template.name.clone(), styles::accent()),
        ]),
        None => Line::from(Span::styled(
            format!("  Templates: {} available", form.templates.len()),
            styles::text_secondary(),
        )),
    };

    let mut view = widgets::FormView::new(title, form.rows())
        .status_line(template_line)
        .status_line(check_line("Pattern", form.pattern_check));
    if let Some(matched) = &form.matched {
        view = view.status_line(Line::from(vec![
            Span::styled("  Matched: ", styles::text_secondary()),
            Span::styled(matched.clone(), styles::text_primary()),
        ]));
    }
    if form.submitting {
        view = view.status_line(saving_line());
    }
    view
}

fn template_form(state: &AppState) -> widgets::FormView<'_> {
    let form = &state.template_edit;
    let title = if form.is_edit() {
        "Edit Template"
    } else {
        "New Template"
    };
    let mut view = widgets::FormView::new(title, form.rows());
    if form.submitting {
        view = view.status_line(saving_line());
    }
    view
}
