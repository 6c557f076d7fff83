//! Students page wiring inside a test window: typed search reaches the
//! roster and the table.

use campus_gui::app::entities::AppEntities;
use campus_gui::components::primitives::text_input::TextInputEvent;
use campus_gui::features::students::page::StudentsPage;
use campus_gui::state::ViewSettings;
use gpui::{Entity, TestAppContext, VisualTestContext};

fn open_page(cx: &mut TestAppContext) -> (AppEntities, Entity<StudentsPage>, &mut VisualTestContext) {
    let mut settings = ViewSettings::default();
    settings.set_locale("en");
    let entities = cx.update(|cx| AppEntities::init(settings, cx));

    let page_entities = entities.clone();
    let (page, cx) =
        cx.add_window_view(move |window, cx| StudentsPage::new(page_entities, window, cx));
    cx.run_until_parked();
    (entities, page, cx)
}

#[gpui::test]
fn typed_search_filters_the_roster(cx: &mut TestAppContext) {
    let (entities, page, cx) = open_page(cx);
    assert_eq!(entities.students.read_with(cx, |s, _| s.total_items()), 42);

    let input = page.read_with(cx, |page, _| page.search_input().clone());
    input.update(cx, |input, cx| {
        input.set_value("MAYA");
        cx.emit(TextInputEvent::Changed("MAYA".to_string()));
    });
    cx.run_until_parked();

    assert_eq!(entities.students.read_with(cx, |s, _| s.total_items()), 4);
    let table = page.read_with(cx, |page, _| page.table().clone());
    let names: Vec<String> =
        table.read_with(cx, |t, _| t.state().rows().iter().map(|s| s.name.clone()).collect());
    assert_eq!(names.len(), 4);
    assert!(names.iter().all(|name| name.starts_with("Maya")));
}
