use crate::layout::Ruling;
use crate::pagesize::PaperSize;
use crate::refs::{ObjectReferences, RefType};
use chrono::{Datelike, Local, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// What ends up in the PDF info dictionary: a title naming the ruling and a
/// subject spelling out its measurements
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub title: String,
    pub subject: String,
}

impl Info {
    /// Describe `ruling` on `paper`, e.g. a title of `Lineatur 2:1:2 60° A4`
    pub fn for_ruling(ruling: &Ruling, paper: &PaperSize) -> Info {
        let mut title = String::from("Lineatur");
        if !ruling.proportions.is_empty() {
            let proportions: Vec<String> =
                ruling.proportions.iter().map(|p| p.to_string()).collect();
            title = format!("{title} {}", proportions.join(":"));
        }
        if let Some(slant) = ruling.slant {
            title = format!("{title} {}°", slant.angle);
        }
        title = format!("{title} {}", paper.name);

        let subject = format!(
            "line height {}, spacing {}, stroke {}",
            ruling.line_height, ruling.line_spacing, ruling.line_width
        );

        Info { title, subject }
    }

    /// Replace the derived title
    pub fn with_title<S: Into<String>>(self, title: S) -> Info {
        Info {
            title: title.into(),
            ..self
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);
        info.title(TextStr(&self.title));
        info.subject(TextStr(&self.subject));
        info.keywords(TextStr("lineatur, calligraphy"));
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(now());
    }
}

fn now() -> Date {
    let now = Local::now();
    let offset = now.offset().local_minus_utc() / 60;
    Date::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour((offset / 60) as i8)
        .utc_offset_minute((offset % 60).unsigned_abs() as u8)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::Slant;
    use crate::pagesize::{A4, LETTER};
    use crate::Mm;

    fn ruling(proportions: &[f32], slant: Option<Slant>) -> Ruling {
        Ruling {
            line_height: Mm(10.0),
            line_spacing: Mm(5.0),
            proportions: proportions.to_vec(),
            slant,
            line_width: Mm(0.3),
        }
    }

    #[test]
    fn title_names_proportions_slant_and_paper() {
        let info = Info::for_ruling(&ruling(&[2.0, 1.0, 2.0], Some(Slant::new(60.0, 10))), &A4);
        assert_eq!(info.title, "Lineatur 2:1:2 60° A4");
        assert_eq!(Info::for_ruling(&ruling(&[], None), &LETTER).title, "Lineatur Letter");
    }

    #[test]
    fn subject_lists_measurements() {
        let info = Info::for_ruling(&ruling(&[1.0], None), &A4);
        assert_eq!(info.subject, "line height 10mm, spacing 5mm, stroke 0.3mm");
    }

    #[test]
    fn explicit_title_wins() {
        let info = Info::for_ruling(&ruling(&[1.0], None), &A4).with_title("Kurrent");
        assert_eq!(info.title, "Kurrent");
    }
}
