//! Regex patterns for PTL and Svedea insurance documents.
//!
//! Amount captures use `[0-9][0-9 \u{00a0}]*` rather than `[\d\s]+` so that a
//! figure never runs into the next line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One number with thousands spaces and an optional decimal comma
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9]+(?:[ \u{00a0}][0-9]{3})*(?:,[0-9]+)?"
    ).unwrap();

    // Staff counts (PTL: "Antal Tandläkare 4", Svedea: "Tandläkare - övrigt 3,00 st")
    pub static ref DENTISTS_PTL: Regex = Regex::new(
        r"(?i)Antal\s+Tandläkare\s+(\d+)"
    ).unwrap();

    pub static ref DENTISTS_SVEDEA: Regex = Regex::new(
        r"(?i)Tandläkare\s*-\s*övrigt\s*([0-9][0-9 \u{00a0}]*,[0-9]+|[0-9]+)\s*st"
    ).unwrap();

    pub static ref HYGIENISTS_PTL: Regex = Regex::new(
        r"(?i)Antal\s+Tandhygienister\s+(\d+)"
    ).unwrap();

    pub static ref HYGIENISTS_SVEDEA: Regex = Regex::new(
        r"(?i)Tandhygienister\s*-\s*övrigt\s*([0-9][0-9 \u{00a0}]*,[0-9]+|[0-9]+)\s*st"
    ).unwrap();

    pub static ref JAW_SURGEONS_PTL: Regex = Regex::new(
        r"(?i)Antal\s+Käkkirurger\s+(\d+)"
    ).unwrap();

    pub static ref ORAL_SURGEONS_PTL: Regex = Regex::new(
        r"(?i)Antal\s+Tandkirurger\s+(\d+)"
    ).unwrap();

    pub static ref JAW_SURGEONS_SVEDEA: Regex = Regex::new(
        r"(?i)Käkkirurger\s*-\s*övrigt\s*([0-9][0-9 \u{00a0}]*,[0-9]+|[0-9]+)\s*st"
    ).unwrap();

    pub static ref ORAL_SURGEONS_SVEDEA: Regex = Regex::new(
        r"(?i)Tandkirurger\s*-\s*övrigt\s*([0-9][0-9 \u{00a0}]*,[0-9]+|[0-9]+)\s*st"
    ).unwrap();

    // Turnover
    pub static ref TURNOVER_PTL: Regex = Regex::new(
        r"(?i)Årsomsättning\s+([0-9][0-9 \u{00a0}]*)\s*kr"
    ).unwrap();

    pub static ref TURNOVER_KSEK_BLOCK: Regex = Regex::new(
        r"(?i)Årsomsättning\s+i\s*KSEK[^\n]*\n\s*([0-9][0-9 \u{00a0},]*)"
    ).unwrap();

    // Interruption period in months
    pub static ref INTERRUPTION_PTL: Regex = Regex::new(
        r"(?i)Avbrottsförsäkring\s+(\d+)\s*månader"
    ).unwrap();

    pub static ref INTERRUPTION_SVEDEA: Regex = Regex::new(
        r"(?i)Ansvarstid\s+(\d+)\s*månader"
    ).unwrap();

    // Prosthetics warranty
    pub static ref PROSTHETICS_YEARS_PTL: Regex = Regex::new(
        r"(?i)\bGrund\s+(\d+)\s*år\b"
    ).unwrap();

    pub static ref PROSTHETICS_YEARS_SVEDEA_WARRANTY: Regex = Regex::new(
        r"(?is)garantiförsäkring\s+för\s+protetik\b.{0,200}?(\d+)\s*år\b"
    ).unwrap();

    pub static ref PROSTHETICS_YEARS_SVEDEA_NEAR: Regex = Regex::new(
        r"(?is)protetik.{0,200}?(\d+)\s*år\b"
    ).unwrap();

    pub static ref PROSTHETICS_DENTISTS_SVEDEA: Regex = Regex::new(
        r"(?i)-\s*Antal\s+tandläkare\s+([0-9][0-9 \u{00a0}]*,[0-9]+|[0-9]+)"
    ).unwrap();

    // "Tandläkare Anna Svensson": role label and two or more words on one line
    pub static ref STAFF_NAME: Regex = Regex::new(
        r"\bTandläkare[ \t]+([\p{L}\-]+(?:[ \t]+[\p{L}\-]+)+)"
    ).unwrap();

    // Premium
    pub static ref PREMIUM_PTL: Regex = Regex::new(
        r"(?i)Subtotal\s+([0-9][0-9 \u{00a0}]*)\s*(?:kr)?"
    ).unwrap();

    pub static ref PREMIUM_SVEDEA: Regex = Regex::new(
        r"(?i)Årspremie\s+([0-9][0-9 \u{00a0}]*)\s*kr"
    ).unwrap();

    // Insured location, on the label line or the line below it
    pub static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?i)Försäkringsställen?(?:[ \t]*:?[ \t]*\n[ \t]*|[ \t]*:[ \t]*|[ \t]+)([^\n]*\S)"
    ).unwrap();

    pub static ref LOCATION_SVEDEA_SECTION: Regex = Regex::new(
        r"(?i)EGENDOMSFÖRSÄKRING\s+SJÄLVRISK\s+([^\n]+,[^\n]+\d)"
    ).unwrap();

    // Swedish postal code line ("952 34 Kalix")
    pub static ref POSTAL_LINE: Regex = Regex::new(
        r"^(?:SE-?)?(\d{3}\s?\d{2})\s+(\p{Lu}[\p{L}\- ]*)$"
    ).unwrap();

    // Treatment rooms (free text)
    pub static ref ROOMS_SVEDEA: Regex = Regex::new(
        r"(?i)\bBeh\.rum\s+([^\n\r]+)"
    ).unwrap();

    pub static ref ROOMS_PTL: Regex = Regex::new(
        r"(?i)Antal\s+behandlingsrum\s+([^\n\r]+)"
    ).unwrap();

    // Sick-leave interruption
    pub static ref SICK_LEAVE: Regex = Regex::new(
        r"(?i)\b(Sjukavbrott|Sjukavbrottsförsäkring)\b"
    ).unwrap();

    pub static ref INSURED_PERSON: Regex = Regex::new(
        r"(?i)^(?:-\s*)?Försäkrad\b\s*[=:]?\s*(.+)$"
    ).unwrap();

    pub static ref FIXED_COSTS: Regex = Regex::new(
        r"(?i)Fasta\s+kostnader\s+([0-9][0-9 \u{00a0}]*(?:,[0-9]+)?)\s*(KSEK|MSEK|kr|SEK)?"
    ).unwrap();
}
