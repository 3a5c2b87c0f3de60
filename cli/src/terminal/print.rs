use std::io::{self, Write};

use colored::*;
use mochila_core::view::{TOTAL_WIDTH, colors};

const BANNER: &str = r#"
              __  __            _     _ _
             |  \/  | ___   ___| |__ (_) | __ _
             | |\/| |/ _ \ / __| '_ \| | |/ _` |
             | |  | | (_) | (__| | | | | | (_| |
             |_|  |_|\___/ \___|_| |_|_|_|\__,_|
"#;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    let text_content: String = format!("⟦ MOCHILA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).color(colors::SEPARATOR);
    writeln!(out, "{}{}{}", sep, text_content.color(colors::PRIMARY).bold(), sep)?;
    writeln!(out, "{}", BANNER.color(colors::PRIMARY).bold())?;
    centerln(out, "Survival backpack: carry up to 10 items")?;
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))?;
    writeln!(out)
}

pub fn centerln(out: &mut impl Write, msg: &str) -> io::Result<()> {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    writeln!(out, "{}{}", space, msg)
}
