use anyhow::Result;
use omnibar::HostOutcome;
use serde_json::json;

/// Print each visited page on its own line.
pub(crate) fn print_plain(outcome: &HostOutcome) {
	if outcome.visited.is_empty() {
		println!("No page visited");
		return;
	}

	for page in &outcome.visited {
		println!("{page}");
	}
}

/// Format the navigation history as a JSON string.
pub(crate) fn format_outcome_json(outcome: &HostOutcome) -> Result<String> {
	let payload = json!({
		"visited": outcome.visited,
		"last": outcome.last(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the navigation history.
pub(crate) fn print_json(outcome: &HostOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_visited_pages() {
		let outcome = HostOutcome {
			visited: vec!["Pricing".into(), "FAQ".into()],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["visited"][0], "Pricing");
		assert_eq!(value["visited"].as_array().map(Vec::len), Some(2));
		assert_eq!(value["last"], "FAQ");
	}

	#[test]
	fn json_format_reports_null_without_navigation() {
		let json = format_outcome_json(&HostOutcome::default()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["last"].is_null());
	}
}
