use std::time::{Duration, Instant};

use assign_tui::{Flow, Focus, Inputs, PEOPLE, Page, PageConfig};
use termcell::{Buffer, Event, Key, Modifiers};

const WADE_JSON: &str = "{\n    \"person\": {\n        \"id\": 1,\n        \"name\": \"Wade Cooper\"\n    }\n}";

fn page() -> Page {
    Page::new(PageConfig::new())
}

fn press(page: &mut Page, key: Key) -> Flow {
    page.handle(Event::key(key), Instant::now())
}

fn expected_json(index: usize) -> String {
    let p = &PEOPLE[index];
    format!(
        "{{\n    \"person\": {{\n        \"id\": {},\n        \"name\": \"{}\"\n    }}\n}}",
        p.id, p.name
    )
}

fn render(page: &mut Page) -> Buffer {
    let mut buf = Buffer::new(80, 24);
    page.render(&mut buf, Instant::now());
    buf
}

// ============================================================================
// Submit Tests
// ============================================================================

#[test]
fn test_default_is_first_person() {
    let page = page();
    let value = page.form().get_values().person.unwrap();
    assert!(std::ptr::eq(value, &PEOPLE[0]));
    assert_eq!(page.focused(), Focus::Person);
}

#[test]
fn test_submit_without_interaction() {
    let mut page = page();
    page.submit();
    assert_eq!(page.alert_message(), Some(WADE_JSON));
    assert_eq!(page.form().submit_count(), 1);
}

#[test]
fn test_select_then_submit_by_keyboard() {
    let mut page = page();

    press(&mut page, Key::Enter);
    assert!(page.listbox().is_open());
    press(&mut page, Key::Down);
    press(&mut page, Key::Down);
    press(&mut page, Key::Enter);
    assert!(!page.listbox().is_open());

    let value = page.form().get_values().person.unwrap();
    assert_eq!(value.id, 3);

    press(&mut page, Key::Tab);
    assert_eq!(page.focused(), Focus::Submit);
    press(&mut page, Key::Enter);

    assert_eq!(page.alert_message(), Some(expected_json(2).as_str()));
    assert!(page.alert_message().unwrap().contains("Devon Webb"));
}

#[test]
fn test_every_option_submits() {
    for index in 0..PEOPLE.len() {
        let mut page = Page::new(PageConfig::new().reduced_motion(true));
        press(&mut page, Key::Enter);
        for _ in 0..index {
            press(&mut page, Key::Down);
        }
        press(&mut page, Key::Enter);
        press(&mut page, Key::Tab);
        press(&mut page, Key::Enter);

        assert_eq!(
            page.alert_message(),
            Some(expected_json(index).as_str()),
            "option {}",
            index
        );
    }
}

#[test]
fn test_submit_unset_person_is_null() {
    let mut page = page();
    page.form().set_values(Inputs { person: None });
    page.submit();
    assert_eq!(page.alert_message(), Some("{\n    \"person\": null\n}"));
}

#[test]
fn test_submit_does_not_change_value() {
    let mut page = page();
    page.submit();
    press(&mut page, Key::Enter);
    page.submit();
    assert_eq!(page.alert_message(), Some(WADE_JSON));
    assert_eq!(page.form().submit_count(), 2);
}

// ============================================================================
// Dismissal & Blocking Tests
// ============================================================================

#[test]
fn test_escape_leaves_value_unchanged() {
    let mut page = page();
    press(&mut page, Key::Enter);
    press(&mut page, Key::Down);
    press(&mut page, Key::Down);
    press(&mut page, Key::Escape);

    assert!(!page.listbox().is_open());
    assert!(std::ptr::eq(page.form().get_values().person.unwrap(), &PEOPLE[0]));
    assert!(!page.form().is_dirty());
}

#[test]
fn test_alert_blocks_other_input() {
    let mut page = page();
    page.submit();

    press(&mut page, Key::Tab);
    assert_eq!(page.focused(), Focus::Person);
    press(&mut page, Key::Down);
    assert!(!page.listbox().is_open());
    assert!(page.alert_message().is_some());

    press(&mut page, Key::Enter);
    assert!(page.alert_message().is_none());
    // Dismissing does not reach the listbox
    assert!(!page.listbox().is_open());
}

#[test]
fn test_tab_closes_open_list_and_moves_focus() {
    let mut page = page();
    press(&mut page, Key::Enter);
    press(&mut page, Key::Tab);

    assert!(!page.listbox().is_open());
    assert_eq!(page.focused(), Focus::Submit);
    press(&mut page, Key::BackTab);
    assert_eq!(page.focused(), Focus::Person);
}

#[test]
fn test_ctrl_c_quits() {
    let mut page = page();
    let ctrl_c = Event::Key {
        key: Key::Char('c'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(page.handle(ctrl_c, Instant::now()), Flow::Quit);
    assert_eq!(press(&mut page, Key::Char('c')), Flow::Continue);
}

// ============================================================================
// Mouse & Rendering Tests
// ============================================================================

#[test]
fn test_click_selects_person() {
    let mut page = page();
    render(&mut page);
    press(&mut page, Key::Tab);

    let button = page.listbox().button_rect().unwrap();
    page.handle(Event::click(button.x + 2, button.y + 1), Instant::now());
    assert!(page.listbox().is_open());
    assert_eq!(page.focused(), Focus::Person);

    render(&mut page);
    let inner = page.listbox().panel_rect().unwrap().inner();
    page.handle(Event::click(inner.x + 1, inner.y + 4), Instant::now());

    assert_eq!(page.form().get_values().person.unwrap().id, 5);
}

#[test]
fn test_render_shows_label_and_value() {
    let mut page = page();
    let buf = render(&mut page);
    let screen: Vec<String> = (0..24).map(|y| buf.row_text(y)).collect();

    assert!(screen.iter().any(|row| row.contains("Assigned to")));
    assert!(screen.iter().any(|row| row.contains("Wade Cooper")));
    assert!(screen.iter().any(|row| row.contains("Submit")));
}

#[test]
fn test_render_alert_shows_json() {
    let mut page = page();
    page.submit();
    let buf = render(&mut page);
    let screen: Vec<String> = (0..24).map(|y| buf.row_text(y)).collect();

    assert!(screen.iter().any(|row| row.contains("\"name\": \"Wade Cooper\"")));
    assert!(screen.iter().any(|row| row.contains("OK")));
}

fn screen(buf: &Buffer) -> Vec<String> {
    (0..buf.height()).map(|y| buf.row_text(y)).collect()
}

#[test]
fn test_short_screen_shows_highlighted_person() {
    let mut page = page();
    let mut buf = Buffer::new(80, 14);

    press(&mut page, Key::Enter);
    for _ in 0..5 {
        press(&mut page, Key::Down);
    }
    page.render(&mut buf, Instant::now());

    let active = page.listbox().active().unwrap();
    assert_eq!(PEOPLE[active].name, "Hellen Schmidt");
    assert!(screen(&buf).iter().any(|row| row.contains("Hellen Schmidt")));

    press(&mut page, Key::End);
    let mut buf = Buffer::new(80, 14);
    page.render(&mut buf, Instant::now());
    assert!(screen(&buf).iter().any(|row| row.contains("Emil Schaefer")));
}

#[test]
fn test_help_line_hidden_under_open_panel() {
    let mut page = page();
    let buf = render_at(&mut page, 80, 14);
    assert!(buf.row_text(12).contains("Ctrl+C quit"));

    press(&mut page, Key::Enter);
    let buf = render_at(&mut page, 80, 14);
    assert!(!screen(&buf).iter().any(|row| row.contains("Ctrl+C")));

    // Tall enough for the whole panel: the help line stays
    let buf = render_at(&mut page, 80, 30);
    assert!(buf.row_text(28).contains("Ctrl+C quit"));
}

fn render_at(page: &mut Page, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    page.render(&mut buf, Instant::now());
    buf
}

#[test]
fn test_fade_schedules_frames_until_closed() {
    let mut page = page();
    let now = Instant::now();
    page.take_needs_render();

    page.handle(Event::key(Key::Enter), now);
    page.handle(Event::key(Key::Escape), now);
    assert!(page.take_needs_render());
    assert!(page.listbox().is_visible());
    assert!(page.next_frame(now).is_some());

    page.tick(now + Duration::from_millis(150));
    assert!(!page.listbox().is_visible());
    assert!(page.next_frame(now).is_none());
    assert!(page.take_needs_render());
}
