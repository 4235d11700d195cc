use sable::config::{Config, Replacement};
use sable::rewrite::apply_replacements;

#[test]
fn stroke_ternary_is_pinned_to_dark_value() {
    let source = "<line stroke={dark?'#334155':'#e5e7eb'} />";
    let (out, count) = apply_replacements(source, &Config::default().replacements).unwrap();
    assert_eq!(out, "<line stroke='#334155' />");
    assert_eq!(count, 1);
}

#[test]
fn const_bindings_lose_their_light_branch() {
    let source = "const textColor = dark ? '#cbd5e1' : '#1f2937';\n\
                  const baseBg = dark ? '#1f2937' : '#e5e7eb';\n\
                  const hoverBg = dark ? '#374151' : '#d1d5db';\n";
    let (out, count) = apply_replacements(source, &Config::default().replacements).unwrap();
    assert_eq!(
        out,
        "const textColor = '#cbd5e1';\nconst baseBg = '#1f2937';\nconst hoverBg = '#374151';\n"
    );
    assert_eq!(count, 3);
}

#[test]
fn spaced_style_ternaries_are_pinned() {
    let source = "backgroundColor: dark ? '#1f2937' : '#ffffff',\n\
                  color: dark ? '#e5e7eb' : '#111827',\n";
    let (out, count) = apply_replacements(source, &Config::default().replacements).unwrap();
    assert_eq!(out, "backgroundColor: '#1f2937',\ncolor: '#e5e7eb',\n");
    assert_eq!(count, 2);
}

#[test]
fn border_concatenation_collapses_to_a_literal() {
    let source = "border: '1px solid ' + (dark ? '#374151' : '#e5e7eb'),";
    let (out, count) = apply_replacements(source, &Config::default().replacements).unwrap();
    assert_eq!(out, "border: '1px solid #374151',");
    assert_eq!(count, 1);
}

#[test]
fn unmatched_source_is_untouched() {
    let source = "const theme = 'dark';\n";
    let (out, count) = apply_replacements(source, &Config::default().replacements).unwrap();
    assert_eq!(out, source);
    assert_eq!(count, 0);
}

#[test]
fn invalid_pattern_reports_an_error() {
    let table = [Replacement {
        pattern: "(".to_string(),
        replacement: "x".to_string(),
    }];
    assert!(apply_replacements("anything", &table).is_err());
}
