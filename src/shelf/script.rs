//! Parsing of command files.
//!
//! Each line is a tab-separated field list whose first field names the command.
//! Trailing empty fields are dropped before the line is interpreted, so
//! `REMOVE\tB1\t\t` reads the same as `REMOVE\tB1`.
//!
//! | Keyword           | Fields                                  |
//! |-------------------|-----------------------------------------|
//! | `ADD`             | category, name, extra, barcode, price   |
//! | `REMOVE`          | barcode                                 |
//! | `SEARCHBYBARCODE` | barcode                                 |
//! | `SEARCHBYNAME`    | name                                    |
//! | `DISPLAY`         | (none)                                  |
//!
//! Unknown keywords and unknown `ADD` categories are not errors: the line is
//! reported as [`Line::Ignored`]. Missing fields for a known command and prices
//! that do not parse are fatal.

use crate::error::{Result, ShelfError};
use crate::model::{Category, Item, Price};

pub const FIELD_SEPARATOR: char = '\t';

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Item),
    Remove { barcode: String },
    SearchByBarcode { barcode: String },
    SearchByName { name: String },
    Display,
}

impl Command {
    /// The keyword that introduces this command in a script.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add(_) => "ADD",
            Command::Remove { .. } => "REMOVE",
            Command::SearchByBarcode { .. } => "SEARCHBYBARCODE",
            Command::SearchByName { .. } => "SEARCHBYNAME",
            Command::Display => "DISPLAY",
        }
    }
}

/// Why a line produced no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    Blank,
    UnknownCommand(String),
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Command(Command),
    Ignored(Skip),
}

/// Split a line on tabs, dropping trailing empty fields.
pub fn split_fields(text: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse one line of a script. `line` is the 1-based line number used in errors.
pub fn parse_line(line: usize, text: &str) -> Result<Line> {
    let fields = split_fields(text);
    let Some((&keyword, args)) = fields.split_first() else {
        return Ok(Line::Ignored(Skip::Blank));
    };

    let command = match keyword {
        "ADD" => match parse_add(line, args)? {
            Some(item) => Command::Add(item),
            None => {
                let category = args.first().copied().unwrap_or_default();
                return Ok(Line::Ignored(Skip::UnknownCategory(category.to_string())));
            }
        },
        "REMOVE" => Command::Remove {
            barcode: required(line, keyword, args, 0, "barcode")?,
        },
        "SEARCHBYBARCODE" => Command::SearchByBarcode {
            barcode: required(line, keyword, args, 0, "barcode")?,
        },
        "SEARCHBYNAME" => Command::SearchByName {
            name: required(line, keyword, args, 0, "name")?,
        },
        "DISPLAY" => Command::Display,
        "" => return Ok(Line::Ignored(Skip::Blank)),
        other => return Ok(Line::Ignored(Skip::UnknownCommand(other.to_string()))),
    };

    Ok(Line::Command(command))
}

/// Returns `Ok(None)` for a category this catalog does not carry.
fn parse_add(line: usize, args: &[&str]) -> Result<Option<Item>> {
    let keyword = "ADD";
    let raw_category = required(line, keyword, args, 0, "category")?;
    let Ok(category) = raw_category.parse::<Category>() else {
        return Ok(None);
    };

    let name = required(line, keyword, args, 1, "name")?;
    let extra = required(line, keyword, args, 2, category.attribute_label())?;
    let barcode = required(line, keyword, args, 3, "barcode")?;
    let raw_price = required(line, keyword, args, 4, "price")?;
    let price: Price = raw_price
        .parse()
        .map_err(|source| ShelfError::InvalidPrice {
            line,
            value: raw_price.clone(),
            source,
        })?;

    Ok(Some(Item::new(category, name, extra, barcode, price)))
}

fn required(
    line: usize,
    keyword: &str,
    args: &[&str],
    index: usize,
    field: &str,
) -> Result<String> {
    args.get(index).map(|s| s.to_string()).ok_or_else(|| {
        ShelfError::malformed(
            line,
            format!("{} is missing its {} field", keyword, field.to_lowercase()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(text: &str) -> Command {
        match parse_line(1, text).unwrap() {
            Line::Command(c) => c,
            other => panic!("expected a command, got {:?}", other),
        }
    }

    #[test]
    fn parses_add() {
        let Command::Add(item) = command("ADD\tBook\tDune\tHerbert\tB1\t15.99") else {
            panic!("expected ADD");
        };
        assert_eq!(item.category(), Category::Book);
        assert_eq!(item.name(), "Dune");
        assert_eq!(item.extra(), "Herbert");
        assert_eq!(item.barcode(), "B1");
        assert_eq!(item.price().to_string(), "15.99");
    }

    #[test]
    fn add_ignores_fields_after_price() {
        assert!(matches!(
            command("ADD\tToy\tKite\tBlue\tT1\t8\tsurplus"),
            Command::Add(_)
        ));
    }

    #[test]
    fn parses_single_argument_commands() {
        assert_eq!(
            command("REMOVE\tB1"),
            Command::Remove {
                barcode: "B1".into()
            }
        );
        assert_eq!(
            command("SEARCHBYBARCODE\tB1"),
            Command::SearchByBarcode {
                barcode: "B1".into()
            }
        );
        assert_eq!(
            command("SEARCHBYNAME\tThe Hobbit"),
            Command::SearchByName {
                name: "The Hobbit".into()
            }
        );
        assert_eq!(command("DISPLAY"), Command::Display);
        assert_eq!(command("DISPLAY\tanything"), Command::Display);
    }

    #[test]
    fn trailing_tabs_are_dropped() {
        assert_eq!(split_fields("REMOVE\tB1\t\t"), vec!["REMOVE", "B1"]);
        assert_eq!(split_fields("A\t\tB"), vec!["A", "", "B"]);
        assert!(split_fields("").is_empty());
    }

    #[test]
    fn unknown_commands_are_ignored() {
        assert_eq!(
            parse_line(1, "FOO\tbar").unwrap(),
            Line::Ignored(Skip::UnknownCommand("FOO".into()))
        );
        assert_eq!(
            parse_line(1, "display").unwrap(),
            Line::Ignored(Skip::UnknownCommand("display".into()))
        );
        assert_eq!(parse_line(1, "").unwrap(), Line::Ignored(Skip::Blank));
        assert_eq!(parse_line(1, "\t\t").unwrap(), Line::Ignored(Skip::Blank));
    }

    #[test]
    fn unknown_category_is_ignored_even_without_other_fields() {
        assert_eq!(
            parse_line(1, "ADD\tFood").unwrap(),
            Line::Ignored(Skip::UnknownCategory("Food".into()))
        );
        assert_eq!(
            parse_line(1, "ADD\tFood\tBread\tWhite\tF1\tcheap").unwrap(),
            Line::Ignored(Skip::UnknownCategory("Food".into()))
        );
    }

    #[test]
    fn add_with_missing_fields_is_malformed() {
        let err = parse_line(7, "ADD\tBook\tDune\tHerbert\tB1").unwrap_err();
        match err {
            ShelfError::Malformed { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("price"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(matches!(
            parse_line(1, "ADD"),
            Err(ShelfError::Malformed { .. })
        ));
        assert!(matches!(
            parse_line(1, "ADD\tToy\tKite\tBlue\tT1\t"),
            Err(ShelfError::Malformed { .. })
        ));
    }

    #[test]
    fn add_with_bad_price_is_fatal() {
        let err = parse_line(3, "ADD\tBook\tDune\tHerbert\tB1\tcheap").unwrap_err();
        match err {
            ShelfError::InvalidPrice { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn lookup_commands_need_an_argument() {
        for text in ["REMOVE", "SEARCHBYBARCODE\t", "SEARCHBYNAME"] {
            assert!(
                matches!(parse_line(1, text), Err(ShelfError::Malformed { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn keyword_round_trips_through_parser() {
        for text in ["REMOVE\tX", "SEARCHBYBARCODE\tX", "SEARCHBYNAME\tX", "DISPLAY"] {
            assert_eq!(command(text).keyword(), text.split('\t').next().unwrap());
        }
    }
}
