use crate::ui::app::App;
use crate::ui::detail::render_detail;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::render_list;
use crate::ui::route::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.route();

    frame.render_widget(Header::new(route, app.is_busy(), app.tick()).widget(), header);
    frame.render_widget(Clear, body);
    match route {
        Route::List => render_list(frame, body, app.list_state(), app.tick()),
        Route::Create | Route::Edit(_) => render_form(frame, body, app.form_state(), app.tick()),
        Route::Detail(_) => render_detail(frame, body, app.detail_state(), app.tick()),
    }
    let footer_widget = Footer::new(route);
    frame.render_widget(footer_widget.widget(footer), footer);
}
