//! Customer letter presenting a new offer against the current policy.
//!
//! The letter is Swedish plain text meant to be pasted into an e-mail. Values
//! come from the two extracted documents; company names, rooms and location
//! can be overridden by hand since extraction is not always reliable for them.

use serde::{Deserialize, Serialize};

use crate::models::config::LetterConfig;
use crate::models::kpi::{DocumentKpis, KpiName};
use crate::overrides::resolve;
use crate::rules::format_number;

const RULE: &str = "----------------------------------------";

const INJECTIONS_NOTE: &str = "Notera att offerten inte inkluderar estetiska injektionsbehandlingar (botox/filler). \
Återkom om det finns ett behov av att utöka omfattningen till att även omfatta den typen av behandlingar.";

/// Per-letter values that are not taken verbatim from the documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterInput {
    pub customer_name: String,
    pub current_company: String,
    pub new_company: String,
    /// Treatment rooms shown in the premium basis.
    pub rooms: String,
    /// Insured location shown in the premium basis.
    pub location: String,
    pub include_injections_note: bool,
}

impl LetterInput {
    /// Input filled from the documents: detected vendors, the new offer's
    /// treatment rooms and the current policy's insured location.
    pub fn from_documents(current: &DocumentKpis, new: &DocumentKpis) -> Self {
        Self {
            customer_name: String::new(),
            current_company: current.vendor.display_name().to_string(),
            new_company: new.vendor.display_name().to_string(),
            rooms: resolve(None, new.kpis.get(KpiName::TreatmentRooms).raw.as_deref()),
            location: resolve(None, Some(current.kpis.get(KpiName::InsuredLocation).display().as_str())),
            include_injections_note: true,
        }
    }

    pub fn with_customer_name(mut self, name: &str) -> Self {
        self.customer_name = name.trim().to_string();
        self
    }

    pub fn with_current_company(mut self, company: Option<&str>) -> Self {
        self.current_company = resolve(company, Some(self.current_company.as_str()));
        self
    }

    pub fn with_new_company(mut self, company: Option<&str>) -> Self {
        self.new_company = resolve(company, Some(self.new_company.as_str()));
        self
    }

    pub fn with_rooms(mut self, rooms: Option<&str>) -> Self {
        self.rooms = resolve(rooms, Some(self.rooms.as_str()));
        self
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = resolve(location, Some(self.location.as_str()));
        self
    }

    pub fn with_injections_note(mut self, include: bool) -> Self {
        self.include_injections_note = include;
        self
    }
}

/// Render the customer letter.
pub fn render_letter(
    input: &LetterInput,
    current: &DocumentKpis,
    new: &DocumentKpis,
    config: &LetterConfig,
) -> String {
    let cur = |kpi: KpiName| current.kpis.get(kpi).display();
    let nw = |kpi: KpiName| new.kpis.get(kpi).display();
    let new_company = input.new_company.as_str();
    let current_company = input.current_company.as_str();

    let mut out = String::new();

    if input.customer_name.is_empty() {
        out.push_str("Hej,\n\n");
    } else {
        out.push_str(&format!("Hej {},\n\n", input.customer_name));
    }
    out.push_str(&format!(
        "Enligt önskemål bifogas här en offert från {} i samarbete med {}.\n\n\n",
        new_company, config.partner
    ));

    section(&mut out, "PRISER");
    out.push_str("| Bolag   | Årspris                      |\n");
    out.push_str("|---------|------------------------------|\n");
    out.push_str(&format!("| {:<7} | {:<28} |\n", new_company, nw(KpiName::Premium)));
    out.push_str(&format!("| {:<7} | {:<28} |\n", current_company, cur(KpiName::Premium)));
    out.push_str("\n\n");

    section(&mut out, "PREMIEGRUND");
    let basis = [
        ("Omsättning", nw(KpiName::Turnover)),
        ("Behandlingsrum", input.rooms.clone()),
        ("Avbrott", nw(KpiName::InterruptionPeriod)),
        ("Tandläkare", nw(KpiName::Dentists)),
        ("Tandhygienister", nw(KpiName::Hygienists)),
        ("Försäkringsställe", input.location.clone()),
    ];
    for (label, value) in basis {
        out.push_str(&basis_line(label, &value));
    }
    if !new.kpis.get(KpiName::SickLeaveDetails).is_empty() {
        out.push_str(&basis_line("Sjukavbrott", &nw(KpiName::SickLeaveDetails)));
    }
    out.push('\n');

    section(&mut out, "PROTETIK");
    let prosthetics: Vec<String> = [
        ("Garantitid (år)", KpiName::ProstheticsWarrantyYears),
        ("Antal tandläkare som omfattas", KpiName::ProstheticsDentists),
    ]
    .into_iter()
    .filter(|&(_, kpi)| nw(kpi) != cur(kpi))
    .map(|(label, kpi)| {
        format!(
            "- {}: {} {}, {} {}",
            label,
            new_company,
            nw(kpi),
            current_company,
            cur(kpi)
        )
    })
    .collect();
    if prosthetics.is_empty() {
        out.push_str("Villkoren är identiska mellan bolagen.\n");
    } else {
        out.push_str(&prosthetics.join("\n"));
        out.push('\n');
    }
    out.push('\n');

    if input.include_injections_note {
        out.push_str(INJECTIONS_NOTE);
        out.push_str("\n\n");
    }

    section(&mut out, "ÖVRIGA SKILLNADER");
    let differences: Vec<String> = [
        ("Angiven omsättning", KpiName::Turnover),
        ("Antal tandhygienister", KpiName::Hygienists),
        ("Sjukavbrott", KpiName::SickLeaveDetails),
    ]
    .into_iter()
    .filter(|&(_, kpi)| nw(kpi) != cur(kpi))
    .map(|(label, kpi)| {
        format!(
            "{}: {} {}, {} {}.",
            label,
            new_company,
            nw(kpi),
            current_company,
            cur(kpi)
        )
    })
    .collect();
    if differences.is_empty() {
        out.push_str("Övriga villkor är identiska.\n");
    } else {
        out.push_str(&format!(
            "Jämförelse mellan {} och {}.\n",
            new_company, current_company
        ));
        out.push_str(&differences.join("\n"));
        out.push('\n');
    }
    out.push('\n');

    section(&mut out, "FÖRSÄKRINGSBELOPP – RÄTTSSKYDD");
    out.push_str(&format!(
        "Max ersättning per skada via {}: {}\n",
        current_company, config.legal_protection_current
    ));
    out.push_str(&format!(
        "Max ersättning per skada via {}: {}\n",
        new_company, config.legal_protection_new
    ));
    out.push_str(&format!(
        "(1 basbelopp {} = {} kr)\n\n\n",
        config.base_amount_year,
        format_number(config.base_amount)
    ));

    section(&mut out, "VID ACCEPT");
    out.push_str(&format!(
        "Bifogar här även villkoren hos {} för patientförsäkring, garantiförsäkring för protetik samt informationsblad.\n\n",
        new_company
    ));
    out.push_str(
        "Vid accept behöver vi namn, efternamn och personnummer på de tandläkare som ska omfattas av \
garantiförsäkringen för protetik. Vi skickar även en fullmakt som behöver undertecknas.\n\n",
    );
    out.push_str(
        "Ni är välkomna att höra av er med frågor eller om ni önskar ett möte för att diskutera offerten.\n\n",
    );
    out.push_str(&config.greeting);
    out.push('\n');

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
}

fn basis_line(label: &str, value: &str) -> String {
    format!("{:<25}{}\n", format!("{}:", label), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fact::{Evidence, Fact, NO_DATA};
    use crate::models::kpi::KpiMap;
    use crate::rules::Vendor;

    fn doc(vendor: Vendor, facts: Vec<(KpiName, Fact)>) -> DocumentKpis {
        let mut kpis = KpiMap::new();
        for (name, fact) in facts {
            kpis.insert(name, fact);
        }
        DocumentKpis {
            source: format!("{}.pdf", vendor),
            vendor,
            pages: 3,
            kpis,
        }
    }

    fn num(raw: &str, unit: &str) -> Fact {
        Fact::numeric(raw, Some(unit), 1.0, Evidence::new(1, raw))
    }

    fn current_policy() -> DocumentKpis {
        doc(
            Vendor::Ptl,
            vec![
                (KpiName::Premium, num("41 520", "kr")),
                (KpiName::Turnover, num("8 232 000", "kr")),
                (KpiName::Hygienists, num("2", "st")),
                (KpiName::ProstheticsWarrantyYears, num("3", "år")),
                (KpiName::ProstheticsDentists, num("2", "st")),
                (
                    KpiName::InsuredLocation,
                    Fact::text("Hantverkargatan 1 a, 952 34 Kalix", Evidence::new(1, "x")),
                ),
            ],
        )
    }

    fn new_offer() -> DocumentKpis {
        doc(
            Vendor::Svedea,
            vec![
                (KpiName::Premium, num("37 240", "kr")),
                (KpiName::Turnover, num("8 232 000", "kr")),
                (KpiName::Hygienists, num("1", "st")),
                (KpiName::Dentists, num("3,00", "st")),
                (KpiName::InterruptionPeriod, num("12", "månader")),
                (KpiName::ProstheticsWarrantyYears, num("3", "år")),
                (KpiName::ProstheticsDentists, num("3", "st")),
                (KpiName::TreatmentRooms, Fact::text("1-4/kök", Evidence::new(2, "Beh.rum 1-4/kök"))),
                (
                    KpiName::SickLeaveDetails,
                    Fact::with_value(1.0, "Lisa Taavo 1,9 MSEK", None, Evidence::new(4, "x")),
                ),
            ],
        )
    }

    #[test]
    fn test_input_from_documents() {
        let input = LetterInput::from_documents(&current_policy(), &new_offer());
        assert_eq!(input.current_company, "PTL");
        assert_eq!(input.new_company, "Svedea");
        assert_eq!(input.rooms, "1-4/kök");
        assert_eq!(input.location, "Hantverkargatan 1 a, 952 34 Kalix");

        let input = input.with_rooms(Some("5")).with_location(Some("  ")).with_new_company(None);
        assert_eq!(input.rooms, "5");
        assert_eq!(input.location, "Hantverkargatan 1 a, 952 34 Kalix");
        assert_eq!(input.new_company, "Svedea");
    }

    #[test]
    fn test_missing_rooms_and_location_show_placeholder() {
        let empty = doc(Vendor::Unknown, vec![]);
        let input = LetterInput::from_documents(&empty, &empty);
        assert_eq!(input.rooms, NO_DATA);
        assert_eq!(input.location, NO_DATA);
    }

    #[test]
    fn test_letter_sections() {
        let current = current_policy();
        let new = new_offer();
        let input = LetterInput::from_documents(&current, &new).with_customer_name("Anna");
        let letter = render_letter(&input, &current, &new, &LetterConfig::default());

        assert!(letter.starts_with("Hej Anna,\n"));
        assert!(letter.contains("en offert från Svedea i samarbete med DentFriends."));
        assert!(letter.contains("| Svedea  | 37 240 kr"));
        assert!(letter.contains("| PTL     | 41 520 kr"));
        assert!(letter.contains("Behandlingsrum:          1-4/kök\n"));
        assert!(letter.contains("Tandläkare:              3 st\n"));
        assert!(letter.contains("Sjukavbrott:             Lisa Taavo 1,9 MSEK\n"));

        // Only the differing prosthetics line is listed
        assert!(letter.contains("- Antal tandläkare som omfattas: Svedea 3 st, PTL 2 st"));
        assert!(!letter.contains("- Garantitid (år)"));

        assert!(letter.contains("Jämförelse mellan Svedea och PTL."));
        assert!(letter.contains("Antal tandhygienister: Svedea 1 st, PTL 2 st."));
        assert!(letter.contains("Sjukavbrott: Svedea Lisa Taavo 1,9 MSEK, PTL —."));
        assert!(!letter.contains("Angiven omsättning"));

        assert!(letter.contains("Max ersättning per skada via PTL: 1 basbelopp"));
        assert!(letter.contains("Max ersättning per skada via Svedea: 2 basbelopp"));
        assert!(letter.contains("(1 basbelopp 2026 = 59 200 kr)"));
        assert!(letter.contains("botox/filler"));
        assert!(letter.trim_end().ends_with("Trevlig helg!"));
    }

    #[test]
    fn test_identical_documents() {
        let current = current_policy();
        let input = LetterInput::from_documents(&current, &current).with_injections_note(false);
        let letter = render_letter(&input, &current, &current, &LetterConfig::default());

        assert!(letter.starts_with("Hej,\n"));
        assert!(letter.contains("Villkoren är identiska mellan bolagen."));
        assert!(letter.contains("Övriga villkor är identiska."));
        assert!(!letter.contains("botox"));
        assert!(!letter.contains("Sjukavbrott:"));
    }
}
