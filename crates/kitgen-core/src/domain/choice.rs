//! Interpretation of raw prompt answers.
//!
//! Unusable input never raises an error here: every function falls back to
//! the caller-supplied default.

/// Map a 1-based menu answer onto `options`.
///
/// Non-numeric input, `0`, and indices past the end all yield `default`.
pub fn pick<T: Copy>(input: &str, options: &[T], default: T) -> T {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or(default)
}

/// Interpret a yes/no answer. Empty or unrecognised input yields `default`.
pub fn yes_no(input: &str, default: bool) -> bool {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => true,
        "n" | "no" | "false" | "0" => false,
        _ => default,
    }
}

/// Render a numbered menu, one line per option, marking the default.
pub fn menu<T: Copy + PartialEq>(
    options: &[T],
    default: T,
    label: impl Fn(&T) -> String,
) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if *option == default { " (default)" } else { "" };
            format!("  {}) {}{}", i + 1, label(option), marker)
        })
        .collect()
}
