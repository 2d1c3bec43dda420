use larder_core::{CardOptions, Ingredient, Recipe, RecipeCard, render_items};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::components::{MenuContext, render_card, render_menu};
use crate::style::default_theme;
use crate::surface::MenuList;

#[test]
fn ingredient_menu_snapshot() {
	let mut menu = MenuList::default();
	render_items(&["Tomato", "egg", "Tomato", "Basil"], &mut menu);
	let theme = default_theme();

	let mut terminal = Terminal::new(TestBackend::new(28, 6)).expect("terminal");
	terminal
		.draw(|frame| {
			let area = frame.area();
			render_menu(
				frame,
				area,
				MenuContext {
					menu: &mut menu,
					title: "Ingredients",
					query: "",
					empty_message: "No matching ingredients",
					theme: &theme,
				},
			);
		})
		.expect("draw menu");

	insta::assert_snapshot!("ingredient_menu", buffer_to_string(terminal.backend().buffer()));
}

#[test]
fn empty_menu_snapshot() {
	let mut menu = MenuList::default();
	render_items::<&str, _>(&[], &mut menu);
	let theme = default_theme();

	let mut terminal = Terminal::new(TestBackend::new(28, 4)).expect("terminal");
	terminal
		.draw(|frame| {
			let area = frame.area();
			render_menu(
				frame,
				area,
				MenuContext {
					menu: &mut menu,
					title: "Utensils",
					query: "zz",
					empty_message: "No matching utensils",
					theme: &theme,
				},
			);
		})
		.expect("draw menu");

	insta::assert_snapshot!("empty_menu", buffer_to_string(terminal.backend().buffer()));
}

#[test]
fn recipe_card_snapshot() {
	let recipe = Recipe {
		name: "Limonade de Coco".into(),
		time: 10,
		image: "Recette01.jpg".into(),
		description: "Mixer.".into(),
		ingredients: vec![
			Ingredient::named("Lait de coco").with_quantity(400.0, Some("ml")),
			Ingredient::named("Glaçons"),
		],
		..Recipe::default()
	};
	let options = CardOptions {
		image_base: "img".into(),
		..CardOptions::default()
	};
	let card = RecipeCard::from_recipe(&recipe, &options);
	let theme = default_theme();

	let mut terminal = Terminal::new(TestBackend::new(32, 10)).expect("terminal");
	terminal
		.draw(|frame| render_card(frame, frame.area(), &card, &theme))
		.expect("draw card");

	insta::assert_snapshot!("recipe_card", buffer_to_string(terminal.backend().buffer()));
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}
