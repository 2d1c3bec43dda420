use larder_core::{CardOptions, FacetKind, Ingredient, PageController, Recipe, RecipeCatalog};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::App;

fn recipe(name: &str, appliance: &str, ingredients: &[&str], utensils: &[&str]) -> Recipe {
	Recipe {
		name: name.into(),
		time: 20,
		appliance: Some(appliance.into()),
		ingredients: ingredients.iter().map(|name| Ingredient::named(*name)).collect(),
		utensils: utensils.iter().map(|name| name.to_string()).collect(),
		..Recipe::default()
	}
}

fn app() -> App<'static> {
	let catalog = RecipeCatalog::new(vec![
		recipe("Tarte", "Four", &["Tomato", "egg"], &["couteau"]),
		recipe("Soupe", "Blender", &["Tomato", "Basil"], &["Louche", "couteau"]),
	]);
	App::new(PageController::new(catalog, CardOptions::default()))
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<larder_core::PageOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handling does not fail")
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn entries(app: &App<'_>, kind: FacetKind) -> Vec<String> {
	app.page().menu_list(kind).entries().to_vec()
}

#[test]
fn new_app_mounts_every_menu() {
	let app = app();
	assert_eq!(entries(&app, FacetKind::Ingredients), ["Basil", "egg", "Tomato"]);
	assert_eq!(entries(&app, FacetKind::Appliances), ["Blender", "Four"]);
	assert_eq!(entries(&app, FacetKind::Utensils), ["couteau", "Louche"]);
	assert_eq!(app.page().card_grid().rows().len(), 1);
}

#[test]
fn typing_filters_only_the_active_facet() {
	let mut app = app();
	type_text(&mut app, "to");
	assert_eq!(entries(&app, FacetKind::Ingredients), ["Tomato"]);
	assert_eq!(entries(&app, FacetKind::Appliances).len(), 2);

	press(&mut app, KeyCode::Backspace);
	press(&mut app, KeyCode::Backspace);
	assert_eq!(entries(&app, FacetKind::Ingredients).len(), 3);
}

#[test]
fn queries_survive_tab_switches() {
	let mut app = app();
	type_text(&mut app, "bas");
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.active_facet(), FacetKind::Appliances);
	type_text(&mut app, "four");

	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.active_facet(), FacetKind::Ingredients);
	assert_eq!(app.query(FacetKind::Ingredients), "bas");
	assert_eq!(app.query(FacetKind::Appliances), "four");
	assert_eq!(entries(&app, FacetKind::Appliances), ["Four"]);
}

#[test]
fn enter_accepts_the_highlighted_entry() {
	let mut app = app().with_start_facet(FacetKind::Utensils);
	press(&mut app, KeyCode::Down);
	let outcome = press(&mut app, KeyCode::Enter).expect("enter ends the session");

	assert!(outcome.accepted);
	assert_eq!(outcome.facet, FacetKind::Utensils);
	assert_eq!(outcome.selection.as_deref(), Some("Louche"));
}

#[test]
fn escape_cancels_without_selection() {
	let mut app = app();
	type_text(&mut app, "egg");
	let outcome = press(&mut app, KeyCode::Esc).expect("escape ends the session");

	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "egg");
	assert_eq!(outcome.selection, None);
}

#[test]
fn enter_on_an_empty_menu_has_no_selection() {
	let mut app = app();
	type_text(&mut app, "zzz");
	let outcome = press(&mut app, KeyCode::Enter).expect("enter ends the session");
	assert!(outcome.accepted);
	assert_eq!(outcome.selection, None);
}

#[test]
fn initial_queries_filter_before_the_first_draw() {
	let app = app()
		.with_initial_query(FacetKind::Appliances, "BLE")
		.with_start_facet(FacetKind::Appliances);
	assert_eq!(entries(&app, FacetKind::Appliances), ["Blender"]);
	assert_eq!(app.current_selection().as_deref(), Some("Blender"));
}

#[test]
fn ctrl_l_toggles_the_log_pane() {
	let mut app = app();
	app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL))
		.unwrap();
	assert!(app.show_logs);
	assert_eq!(app.query(FacetKind::Ingredients), "");

	let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
}

#[test]
fn mouse_wheel_over_the_menu_moves_the_selection() {
	let mut app = app();
	let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();

	let menu = app.layout.menu.expect("menu area recorded");
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::ScrollDown,
		column: menu.x + 1,
		row: menu.y + 1,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.current_selection().as_deref(), Some("egg"));
}

#[test]
fn page_keys_scroll_the_card_grid() {
	let recipes = (1..=10)
		.map(|n| recipe(&format!("R{n}"), "Four", &["Sel"], &[]))
		.collect();
	let controller = PageController::new(RecipeCatalog::new(recipes), CardOptions::default());
	let mut app = App::new(controller);

	let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	assert_eq!(app.page().card_grid().rows().len(), 4);

	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.page().card_grid().scroll(), 2);
	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.page().card_grid().scroll(), 2);
	press(&mut app, KeyCode::PageUp);
	assert_eq!(app.page().card_grid().scroll(), 0);
}
