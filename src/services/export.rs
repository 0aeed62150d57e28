use crate::models::ColorState;

/// Render a palette as CSS custom properties, numbered from 1.
pub fn css_variables(colors: &[ColorState]) -> String {
    let mut css = String::from(":root {\n");
    for (i, state) in colors.iter().enumerate() {
        css.push_str(&format!("  --color-{}: {};\n", i + 1, state.color));
    }
    css.push_str("}\n");
    css
}
