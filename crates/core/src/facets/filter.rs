use indexmap::IndexSet;
use log::debug;

/// Sort values case-insensitively and drop exact duplicates.
///
/// The sort is stable, so values that compare equal once lower-cased keep
/// their original relative order. De-duplication keeps the first occurrence
/// of each exact string.
#[must_use]
pub fn sorted_unique<S: AsRef<str>>(values: &[S]) -> Vec<String> {
	let mut keyed: Vec<(String, &str)> = values
		.iter()
		.map(|value| {
			let value: &str = value.as_ref();
			(value.to_lowercase(), value)
		})
		.collect();
	keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

	let unique: IndexSet<&str> = keyed.into_iter().map(|(_, value)| value).collect();
	unique.into_iter().map(str::to_string).collect()
}

/// Keep the values whose lower-cased form contains the lower-cased query.
///
/// The query is used verbatim apart from case folding; surrounding
/// whitespace is significant and an empty query keeps every value.
#[must_use]
pub fn filter_values<'a, S: AsRef<str>>(query: &str, values: &'a [S]) -> Vec<&'a str> {
	let needle = query.to_lowercase();
	let kept: Vec<&str> = values
		.iter()
		.map(|value| -> &str { value.as_ref() })
		.filter(|value| value.to_lowercase().contains(&needle))
		.collect();
	debug!(
		"query {query:?} kept {} of {} values",
		kept.len(),
		values.len()
	);
	kept
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sorts_ignoring_case() {
		let sorted = sorted_unique(&["Blender", "apple", "Oven"]);
		assert_eq!(sorted, ["apple", "Blender", "Oven"]);
	}

	#[test]
	fn duplicates_collapse_to_one_entry() {
		let sorted = sorted_unique(&["Tomato", "egg", "Tomato", "Basil"]);
		assert_eq!(sorted, ["Basil", "egg", "Tomato"]);
	}

	#[test]
	fn case_variants_are_distinct_and_keep_input_order() {
		assert_eq!(sorted_unique(&["sucre", "Sucre"]), ["sucre", "Sucre"]);
		assert_eq!(sorted_unique(&["Sucre", "sucre"]), ["Sucre", "sucre"]);
	}

	#[test]
	fn output_is_pairwise_ordered() {
		let values = ["zeste", "Ail", "beurre", "Zeste", "ail", "Échalote", "eau"];
		let sorted = sorted_unique(&values);
		for pair in sorted.windows(2) {
			assert!(pair[0].to_lowercase() <= pair[1].to_lowercase(), "{pair:?}");
		}
	}

	#[test]
	fn accented_initials_sort_after_ascii_letters() {
		let sorted = sorted_unique(&["zeste", "Échalote", "eau"]);
		assert_eq!(sorted, ["eau", "zeste", "Échalote"]);
	}

	#[test]
	fn large_inputs_keep_first_copy_of_each_value() {
		let values: Vec<String> = (0..30_000).map(|n| format!("épice {:03}", n % 300)).collect();
		let sorted = sorted_unique(&values);
		assert_eq!(sorted.len(), 300);
		assert_eq!(sorted.first().map(String::as_str), Some("épice 000"));
		assert_eq!(sorted.last().map(String::as_str), Some("épice 299"));
	}

	#[test]
	fn query_matches_substrings_case_insensitively() {
		let values = ["Tomato", "egg", "Tomato", "Basil", "Potato"];
		assert_eq!(filter_values("TO", &values), ["Tomato", "Tomato", "Potato"]);
		assert_eq!(filter_values("", &values), values);
	}

	#[test]
	fn whitespace_queries_are_literal() {
		let values = ["Lait de coco", "Sucre", "Riz blanc"];
		assert_eq!(filter_values(" ", &values), ["Lait de coco", "Riz blanc"]);
		assert!(filter_values(" sucre", &values).is_empty());
	}

	#[test]
	fn accents_are_not_folded() {
		let values = ["Échalote", "echalote"];
		assert_eq!(filter_values("é", &values), ["Échalote"]);
		assert_eq!(filter_values("ec", &values), ["echalote"]);
	}
}
