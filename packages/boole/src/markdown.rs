use std::ops::Deref;

use colored::{Color, ColoredString};

/// Renders coloured terminal text as an HTML span, for Markdown output.
pub trait Markdown {
    fn markdown(&self) -> String;
}

impl Markdown for ColoredString {
    fn markdown(&self) -> String {
        let color = match self.fgcolor {
            Some(Color::Black) => "black",
            Some(Color::Red) => "red",
            Some(Color::Green) => "green",
            Some(Color::Yellow) => "yellow",
            Some(Color::Blue) => "blue",
            Some(Color::Magenta) => "magenta",
            Some(Color::Cyan) => "cyan",
            Some(Color::White) => "white",
            _ => return self.deref().to_owned(),
        };

        format!("<span style=\"color: {color};\">{}</span>", self.deref())
    }
}
