use clap::Args;

use crate::error::Result;
use crate::types::Color;

/// Show every representation of one or more hex colors
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Colors in #RRGGBBAA form (quote to protect the # from the shell)
    #[arg(required = true)]
    pub colors: Vec<String>,
}

pub fn run(args: ColorArgs) -> Result<()> {
    for (i, value) in args.colors.iter().enumerate() {
        let color = Color::parse(value)?;
        if i > 0 {
            println!();
        }
        println!("{}", render(&color));
    }
    Ok(())
}

fn render(color: &Color) -> String {
    [
        format!("color-hex: {}", color.color_hex()),
        format!("argb-hex:  {}", color.argb_hex()),
        format!("rgba-hex:  {}", color.rgba_hex()),
        format!("css-rgba:  {}", color.css_rgba()),
        format!("ui-color:  {}", color.ui_color()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_lists_all_representations() {
        let color = Color::parse("#FF000080").unwrap();
        assert_eq!(
            render(&color),
            "color-hex: #FF0000 50%\n\
             argb-hex:  #80FF0000\n\
             rgba-hex:  #FF000080\n\
             css-rgba:  rgba(255,0,0,0.5)\n\
             ui-color:  (r:255.00 g:0.00 b:0.00 a:128.00)"
        );
    }

    #[test]
    fn test_run_rejects_invalid() {
        let args = ColorArgs {
            colors: vec!["#FF0000".to_string()],
        };
        assert!(run(args).is_err());
    }
}
