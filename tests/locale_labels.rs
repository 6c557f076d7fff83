//! Column labels follow the UI language. Kept in its own test binary because
//! the active locale is process-wide.

use campus_gui::app::entities::AppEntities;
use campus_gui::features::students::page::StudentsPage;
use campus_gui::state::ViewSettings;
use gpui::{Entity, SharedString, TestAppContext, VisualTestContext};

fn column_labels(page: &Entity<StudentsPage>, cx: &mut VisualTestContext) -> Vec<SharedString> {
    let table = page.read_with(cx, |page, _| page.table().clone());
    table.read_with(cx, |table, _| table.column_labels())
}

#[gpui::test]
fn student_columns_follow_locale(cx: &mut TestAppContext) {
    rust_i18n::set_locale("en");
    let mut settings = ViewSettings::default();
    settings.set_locale("en");
    let entities = cx.update(|cx| AppEntities::init(settings, cx));

    let page_entities = entities.clone();
    let (page, cx) =
        cx.add_window_view(move |window, cx| StudentsPage::new(page_entities, window, cx));
    cx.run_until_parked();
    assert_eq!(column_labels(&page, cx)[0].as_ref(), "Name");

    rust_i18n::set_locale("zh-CN");
    entities.settings.update(cx, |settings, cx| {
        settings.set_locale("zh-CN");
        cx.notify();
    });
    cx.run_until_parked();

    let labels = column_labels(&page, cx);
    assert_eq!(labels[0].as_ref(), "姓名");
    assert_eq!(labels[1].as_ref(), "年级");

    // Same locale again keeps the columns
    entities.settings.update(cx, |_, cx| cx.notify());
    cx.run_until_parked();
    assert_eq!(column_labels(&page, cx)[0].as_ref(), "姓名");
}
