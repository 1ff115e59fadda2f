use iconpick_core::field::view::{LABEL_CHANGE, LABEL_CLEAR, LABEL_SELECT, UNCATEGORIZED_KEY};
use iconpick_core::{
    Catalog, CategoryRecord, FieldHost, FieldProps, GlyphTable, IconRecord, PickerConfig,
    PickerSession, SelectionDisplay,
};

#[derive(Default)]
struct RecordingHost {
    calls: Vec<(String, String)>,
}

impl FieldHost for RecordingHost {
    fn on_change(&mut self, name: &str, value: &str) {
        self.calls.push((name.to_string(), value.to_string()));
    }
}

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            IconRecord::new("home")
                .with_tags(["house"])
                .with_categories(["buildings"]),
            IconRecord::new("castle").with_categories(["buildings"]),
            IconRecord::new("tent").with_categories(["camping"]),
        ],
        vec![
            CategoryRecord::new("buildings", "Buildings", "home"),
            CategoryRecord::new("camping", "Camping", "campfire"),
        ],
    )
    .unwrap()
}

fn session_with(value: Option<&str>, disabled: bool) -> PickerSession {
    let mut props = FieldProps::new("icon");
    props.value = value.map(str::to_string);
    props.disabled = disabled;
    props.label = "Icon".to_string();
    PickerSession::new(props, PickerConfig::default())
}

#[test]
fn selecting_reports_once_and_closes() {
    let catalog = catalog();
    let glyphs = GlyphTable::from_catalog(&catalog);
    let mut host = RecordingHost::default();
    let mut session = session_with(None, false);

    assert!(session.open());
    session.set_query("hou");
    assert!(session.select("home", &mut host));

    assert_eq!(host.calls, vec![("icon".to_string(), "home".to_string())]);
    assert!(!session.is_open());
    assert_eq!(session.query(), "");
    assert_eq!(session.value(), "home");

    let view = session.view(&catalog, &glyphs);
    assert_eq!(view.trigger_label, LABEL_CHANGE);
    match view.selection {
        SelectionDisplay::Selected {
            name,
            glyph,
            is_fallback,
        } => {
            assert_eq!(name, "home");
            assert_eq!(glyph.component, "Home");
            assert!(!is_fallback);
        }
        other => panic!("expected selection, got {other:?}"),
    }
}

#[test]
fn clearing_reports_empty_string_and_closes() {
    let mut host = RecordingHost::default();
    let mut session = session_with(Some("home"), false);

    session.open();
    assert!(session.clear(&mut host));

    assert_eq!(host.calls, vec![("icon".to_string(), String::new())]);
    assert!(!session.is_open());
    assert!(!session.has_value());
}

#[test]
fn disabled_field_ignores_interaction() {
    let mut host = RecordingHost::default();
    let mut session = session_with(Some("home"), true);

    assert!(!session.open());
    assert!(!session.select("castle", &mut host));
    assert!(!session.clear(&mut host));

    assert!(host.calls.is_empty());
    assert_eq!(session.value(), "home");
    assert!(!session.is_open());
}

#[test]
fn stale_value_renders_with_fallback_glyph() {
    let catalog = catalog();
    let glyphs = GlyphTable::from_catalog(&catalog);
    let session = session_with(Some("removed-icon"), false);

    let view = session.view(&catalog, &glyphs);
    match view.selection {
        SelectionDisplay::Selected {
            glyph, is_fallback, ..
        } => {
            assert!(is_fallback);
            assert_eq!(glyph.component, "HelpCircle");
        }
        other => panic!("expected selection, got {other:?}"),
    }
}

#[test]
fn closed_picker_renders_placeholder_without_sections() {
    let catalog = catalog();
    let glyphs = GlyphTable::from_catalog(&catalog);
    let session = session_with(None, false);

    let view = session.view(&catalog, &glyphs);
    assert_eq!(view.trigger_label, LABEL_SELECT);
    assert!(matches!(view.selection, SelectionDisplay::Empty { .. }));
    assert!(view.sections.is_empty());
    assert_eq!(view.clear_label, None);
    assert_eq!(view.label, "Icon");
}

#[test]
fn open_picker_renders_sections_with_headers_and_fallback_category_glyph() {
    let catalog = catalog();
    let glyphs = GlyphTable::from_catalog(&catalog);
    let mut session = session_with(Some("castle"), false);
    session.open();

    let view = session.view(&catalog, &glyphs);
    assert_eq!(view.clear_label, Some(LABEL_CLEAR));
    assert_eq!(view.sections.len(), 2);

    let buildings = &view.sections[0];
    assert_eq!(buildings.key, "buildings");
    let header = buildings.header.as_ref().unwrap();
    assert_eq!(header.title, "Buildings");
    assert!(!header.is_fallback);
    assert_eq!(buildings.icon_count(), 2);
    assert!(buildings.rows[0].iter().any(|cell| cell.name == "castle" && cell.selected));
    assert!(buildings.rows[0].iter().any(|cell| cell.name == "home" && !cell.selected));

    let camping = &view.sections[1];
    let header = camping.header.as_ref().unwrap();
    assert!(header.is_fallback);
    assert_eq!(header.glyph.component, "HelpCircle");
}

#[test]
fn config_controls_grid_columns_and_headers() {
    let icons: Vec<IconRecord> = (0..5)
        .map(|index| IconRecord::new(format!("dot-{index}")))
        .collect();
    let catalog = Catalog::new(icons, Vec::new()).unwrap();
    let glyphs = GlyphTable::from_catalog(&catalog);
    let config = PickerConfig {
        result_cap: 4,
        show_category_headers: false,
        grid_columns: 3,
    };
    let mut session = PickerSession::new(FieldProps::new("icon"), config);
    session.open();

    let view = session.view(&catalog, &glyphs);
    assert_eq!(view.sections.len(), 1);
    let section = &view.sections[0];
    assert_eq!(section.key, UNCATEGORIZED_KEY);
    assert!(section.header.is_none());
    let row_lengths: Vec<usize> = section.rows.iter().map(Vec::len).collect();
    assert_eq!(row_lengths, vec![3, 1]);
}

#[test]
fn selecting_same_icon_from_two_groups_is_idempotent() {
    let catalog = Catalog::new(
        vec![IconRecord::new("compass").with_categories(["navigation", "travel"])],
        vec![
            CategoryRecord::new("navigation", "Navigation", "compass"),
            CategoryRecord::new("travel", "Travel", "compass"),
        ],
    )
    .unwrap();
    let mut host = RecordingHost::default();
    let mut session = session_with(None, false);

    session.open();
    let groups = session.groups(&catalog);
    assert_eq!(groups.len(), 2);
    let first = groups[0].icons[0].name.clone();
    let second = groups[1].icons[0].name.clone();

    session.select(&first, &mut host);
    session.open();
    session.select(&second, &mut host);

    assert_eq!(session.value(), "compass");
    assert_eq!(host.calls.len(), 2);
    assert!(host.calls.iter().all(|(_, value)| value == "compass"));
}
