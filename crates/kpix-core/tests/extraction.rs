//! End-to-end extraction over synthetic PTL and Svedea documents.

use kpix_core::{
    Comparison, KpiExtractor, KpiName, LetterInput, PageText, TextDocument, Vendor, NO_DATA,
    render_letter,
};
use kpix_core::models::config::LetterConfig;
use pretty_assertions::assert_eq;

fn ptl_policy() -> Vec<PageText> {
    vec![
        PageText::new(
            1,
            "PTL Försäkring\nTandvård i Kalix AB\nHantverkargatan 1 a\n952 34 Kalix\n\
             Försäkringsbesked Kundnr 123456\nSubtotal 41 520 kr\n",
        ),
        PageText::new(
            2,
            "Personal\nAntal Tandläkare 2\nAntal Tandhygienister 2\nAntal Tandkirurger 1\n\
             Årsomsättning 8 232 000 kr\nAvbrottsförsäkring 12 månader\n",
        ),
        PageText::new(
            3,
            "Garantiförsäkring protetik\nGrund 3 år\nTillägg 5 år\n\
             Tandläkare Anna Svensson\nTandläkare Karin Berg\nTandläkare Anna Svensson\n",
        ),
    ]
}

fn svedea_offer() -> Vec<PageText> {
    vec![
        PageText::new(
            1,
            "Svedea AB\nBox 3209\n103 64 Stockholm\nOffert Tandvårdsförsäkring\n\
             Årspremie 37 240 kr\n",
        ),
        PageText::new(
            2,
            "Tandläkare - övrigt 3,00 st\nTandhygienister - övrigt 1,00 st\n\
             Beh.rum 1-4/kök\nÅrsomsättning i KSEK Varav export\n10 000 10 000 0 0 0\n\
             Ansvarstid 24 månader\n",
        ),
        PageText::new(
            3,
            "EGENDOMSFÖRSÄKRING SJÄLVRISK\nKalix, Hantverkargatan 1\n\
             Garantiförsäkring\n- Antal tandläkare 3\n",
        ),
        PageText::new(
            4,
            "SJUKAVBROTTSFÖRSÄKRING\n- Försäkrad = Lisa Taavo\nFasta kostnader 1 900 KSEK\n",
        ),
    ]
}

#[test]
fn test_ptl_policy() {
    let result = KpiExtractor::new().extract_pages("ptl.pdf", &ptl_policy());
    let kpis = &result.kpis;

    assert_eq!(result.vendor, Vendor::Ptl);
    assert_eq!(result.pages, 3);
    assert_eq!(kpis.len(), KpiName::ALL.len());

    assert_eq!(kpis.get(KpiName::Dentists).display(), "2 st");
    assert_eq!(kpis.get(KpiName::Hygienists).display(), "2 st");
    assert_eq!(kpis.get(KpiName::OralSurgeons).display(), "1 st");
    assert_eq!(kpis.get(KpiName::Turnover).display(), "8 232 000 kr");
    assert_eq!(kpis.get(KpiName::InterruptionPeriod).display(), "12 månader");
    assert_eq!(kpis.get(KpiName::ProstheticsWarrantyYears).display(), "3 år");
    assert_eq!(kpis.get(KpiName::ProstheticsDentists).value, Some(2.0));
    assert_eq!(kpis.get(KpiName::Premium).display(), "41 520 kr");
    assert_eq!(
        kpis.get(KpiName::InsuredLocation).display(),
        "Hantverkargatan 1 a, 952 34 Kalix"
    );
    assert_eq!(kpis.get(KpiName::TreatmentRooms).display(), NO_DATA);
    assert_eq!(kpis.get(KpiName::SickLeaveExists).display(), "No");
    assert!(kpis.get(KpiName::SickLeaveDetails).is_empty());
}

#[test]
fn test_svedea_offer() {
    let result = KpiExtractor::new().extract_pages("svedea.pdf", &svedea_offer());
    let kpis = &result.kpis;

    assert_eq!(result.vendor, Vendor::Svedea);
    assert_eq!(kpis.get(KpiName::Dentists).display(), "3 st");
    assert_eq!(kpis.get(KpiName::Hygienists).display(), "1 st");
    assert_eq!(kpis.get(KpiName::Turnover).value, Some(10_000_000.0));
    assert_eq!(kpis.get(KpiName::Turnover).display(), "10 000 000 kr");
    assert_eq!(kpis.get(KpiName::InterruptionPeriod).display(), "24 månader");
    assert_eq!(kpis.get(KpiName::Premium).display(), "37 240 kr");
    assert_eq!(kpis.get(KpiName::TreatmentRooms).display(), "1-4/kök");
    assert_eq!(
        kpis.get(KpiName::InsuredLocation).display(),
        "Kalix, Hantverkargatan 1"
    );
    assert_eq!(kpis.get(KpiName::ProstheticsDentists).display(), "3 st");
    // No period stated: the standard term
    assert_eq!(kpis.get(KpiName::ProstheticsWarrantyYears).display(), "3 år");
    assert_eq!(kpis.get(KpiName::SickLeaveExists).display(), "Yes");
    assert_eq!(kpis.get(KpiName::SickLeaveExists).page(), Some(4));
    assert_eq!(
        kpis.get(KpiName::SickLeaveDetails).display(),
        "Lisa Taavo 1,9 MSEK"
    );
}

#[test]
fn test_svedea_brand_beats_ptl_words() {
    let pages = vec![PageText::new(
        1,
        "Svedea offert\nJämfört med ert försäkringsbesked från PTL",
    )];
    let result = KpiExtractor::new().extract_pages("x", &pages);
    assert_eq!(result.vendor, Vendor::Svedea);
}

#[test]
fn test_text_dump_source() {
    let dump = svedea_offer()
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("\x0C");
    let result = KpiExtractor::new()
        .extract(&TextDocument::new(dump), "svedea.txt")
        .unwrap();
    assert_eq!(result.pages, 4);
    assert_eq!(result.kpis.get(KpiName::Premium).page(), Some(1));
}

#[test]
fn test_compare_and_letter() {
    let extractor = KpiExtractor::new();
    let current = extractor.extract_pages("ptl.pdf", &ptl_policy());
    let new = extractor.extract_pages("svedea.pdf", &svedea_offer());

    let comparison = Comparison::new(&current, &new, 120);
    let premium = comparison.row(KpiName::Premium).unwrap();
    assert_eq!(premium.difference, Some(37_240.0 - 41_520.0));
    assert!(comparison.row(KpiName::SickLeaveExists).unwrap().difference.is_none());

    let input = LetterInput::from_documents(&current, &new).with_customer_name("Anna");
    let letter = render_letter(&input, &current, &new, &LetterConfig::default());
    assert!(letter.contains("| Svedea  | 37 240 kr"));
    assert!(letter.contains("Försäkringsställe:       Hantverkargatan 1 a, 952 34 Kalix"));
    assert!(letter.contains("Angiven omsättning: Svedea 10 000 000 kr, PTL 8 232 000 kr."));
    assert!(letter.contains("- Antal tandläkare som omfattas: Svedea 3 st, PTL 2 st"));
}
