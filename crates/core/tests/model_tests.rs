use investment_ledger_core::errors::{CoreError, ValidationError};
use investment_ledger_core::models::category::{Category, PALETTE};
use investment_ledger_core::models::contribution::ContributionDistribution;
use investment_ledger_core::models::entry::{EntryId, InvestmentEntry, NewEntry};
use investment_ledger_core::models::month::Month;
use investment_ledger_core::models::portfolio::Portfolio;
use investment_ledger_core::models::settings::Settings;
use investment_ledger_core::models::snapshot::RegistrationOutcome;
use std::collections::HashSet;

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn all_lists_eight_categories_in_selector_order() {
        assert_eq!(Category::ALL.len(), 8);
        assert_eq!(Category::ALL[0], Category::Stocks);
        assert_eq!(Category::ALL[7], Category::Savings);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::Stocks.label(), "Ações");
        assert_eq!(Category::TermDeposits.label(), "Depósitos a prazo");
        assert_eq!(Category::Savings.to_string(), "Poupança");
    }

    #[test]
    fn name_required_subset() {
        let required: HashSet<Category> = Category::requiring_name().into_iter().collect();
        let expected: HashSet<Category> = [
            Category::Stocks,
            Category::Etfs,
            Category::InvestmentFunds,
            Category::Bonds,
        ]
        .into_iter()
        .collect();
        assert_eq!(required, expected);
        assert!(!Category::Savings.requires_name());
        assert!(!Category::RetirementPlan.requires_name());
    }

    #[test]
    fn colors_follow_palette_by_position() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.color(), PALETTE[i]);
        }
        assert_eq!(Category::Stocks.color(), "#3b82f6");
        assert_eq!(Category::Savings.color(), "#f97316");
    }

    #[test]
    fn parse_known_label() {
        assert_eq!("ETFs".parse::<Category>().unwrap(), Category::Etfs);
        assert_eq!("  Poupança ".parse::<Category>().unwrap(), Category::Savings);
    }

    #[test]
    fn parse_empty_is_missing_category() {
        assert_eq!("".parse::<Category>(), Err(ValidationError::MissingCategory));
        assert_eq!("   ".parse::<Category>(), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn parse_unknown_label() {
        assert_eq!(
            "Crypto".parse::<Category>(),
            Err(ValidationError::UnknownCategory("Crypto".into()))
        );
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Category::Stocks).unwrap();
        assert_eq!(json, "\"Ações\"");
        let back: Category = serde_json::from_str("\"PPR\"").unwrap();
        assert_eq!(back, Category::RetirementPlan);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Month
// ═══════════════════════════════════════════════════════════════════

mod month {
    use super::*;

    #[test]
    fn ordering_is_calendar_order() {
        let mut months = vec![Month::Dec, Month::Jan, Month::Jun];
        months.sort();
        assert_eq!(months, vec![Month::Jan, Month::Jun, Month::Dec]);
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = Month::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"]
        );
    }

    #[test]
    fn number_roundtrip() {
        for m in Month::ALL {
            assert_eq!(Month::from_number(m.number()), Some(m));
        }
        assert_eq!(Month::Jan.number(), 1);
        assert_eq!(Month::Dec.number(), 12);
    }

    #[test]
    fn from_number_out_of_range() {
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn from_chrono_month() {
        assert_eq!(Month::from(chrono::Month::February), Month::Feb);
        assert_eq!(Month::from(chrono::Month::December), Month::Dec);
    }

    #[test]
    fn parse_display_and_english_labels() {
        assert_eq!("Fev".parse::<Month>().unwrap(), Month::Feb);
        assert_eq!("feb".parse::<Month>().unwrap(), Month::Feb);
        assert_eq!("DEZ".parse::<Month>().unwrap(), Month::Dec);
        assert_eq!("Oct".parse::<Month>().unwrap(), Month::Oct);
    }

    #[test]
    fn parse_unknown_label() {
        let err = "Foo".parse::<Month>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownMonth(ref s) if s == "Foo"));
    }

    #[test]
    fn current_is_a_valid_month() {
        assert!(Month::ALL.contains(&Month::current()));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Entries
// ═══════════════════════════════════════════════════════════════════

mod entry {
    use super::*;

    #[test]
    fn entry_id_display() {
        assert_eq!(EntryId(42).to_string(), "42");
    }

    #[test]
    fn entry_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&EntryId(7)).unwrap(), "7");
    }

    #[test]
    fn new_entry_sets_category() {
        let e = NewEntry::new(Category::Etfs, "VWCE", 250.0);
        assert_eq!(e.category, Some(Category::Etfs));
        assert_eq!(e.name, "VWCE");
        assert_eq!(e.value, 250.0);
    }

    #[test]
    fn clone_is_independent() {
        let a = InvestmentEntry {
            id: EntryId(1),
            category: Category::Stocks,
            name: "AAPL".into(),
            value: 100.0,
        };
        let mut b = a.clone();
        b.value = 200.0;
        assert_eq!(a.value, 100.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio, Settings, Outcomes
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn for_month_starts_empty() {
        let p = Portfolio::for_month(Month::Mar);
        assert!(p.entries.is_empty());
        assert!(p.snapshots.is_empty());
        assert!(p.contribution_percentages.is_empty());
        assert_eq!(p.next_id, 1);
        assert_eq!(p.monthly_contribution, 0.0);
        assert_eq!(p.selected_month, Month::Mar);
    }

    #[test]
    fn total_value_of_empty_is_zero() {
        assert_eq!(Portfolio::for_month(Month::Jan).total_value(), 0.0);
    }

    #[test]
    fn json_roundtrip_keeps_month_and_category_keys() {
        let mut p = Portfolio::for_month(Month::Apr);
        p.contribution_percentages.insert(Category::Stocks, 40.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.default_currency, "EUR");
        assert!(s.auto_register_snapshots);
    }

    #[test]
    fn auto_register_defaults_when_missing_from_json() {
        let s: Settings = serde_json::from_str(r#"{"default_currency":"USD"}"#).unwrap();
        assert_eq!(s.default_currency, "USD");
        assert!(s.auto_register_snapshots);
    }
}

mod outcomes {
    use super::*;

    #[test]
    fn registration_is_recorded() {
        assert!(RegistrationOutcome::Recorded(Month::Jan).is_recorded());
        assert!(!RegistrationOutcome::SkippedEmpty.is_recorded());
        assert!(!RegistrationOutcome::SkippedUnchanged.is_recorded());
    }

    #[test]
    fn unallocated_contribution() {
        let d = ContributionDistribution {
            lines: vec![],
            monthly_total: 500.0,
            total_allocated: 300.0,
            total_percentage: 60.0,
            over_allocated: false,
        };
        assert!((d.unallocated() - 200.0).abs() < 1e-9);
    }
}
