//! Tests for report rendering.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{Value, json};

use super::context::{BehavioralSignals, ReportContext};
use super::error::ReportError;
use super::renderer::{render_report, render_report_at};
use super::sections::{RatioDisplay, ReportDocument, Section};
use crate::input::CreditApplication;
use crate::ratios::{RatioName, compute_ratios};

fn payload() -> Value {
    json!({
        "company": {
            "name": "Distribuidora Boa Vista S.A.",
            "cnpj": "98.765.432/0001-10",
            "sector": "comercio",
            "region": "SP"
        },
        "financials": {
            "period_months": 12,
            "revenue": 100000.0,
            "cogs": 60000.0,
            "operating_expenses": 20000.0,
            "assets_current": 50000.0,
            "assets_total": 200000.0,
            "liabilities_current": 25000.0,
            "liabilities_total": 80000.0,
            "equity": 120000.0
        },
        "receivable": {
            "type": "duplicata_escritural",
            "amount": 1234.5,
            "due_days": 90
        },
        "behavioral": {
            "payment_history": "irregular",
            "delinquency_events_last_12m": 2
        }
    })
}

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

fn context() -> ReportContext {
    let app = CreditApplication::from_value(payload()).unwrap();
    ReportContext::from(&app)
}

fn render(context: &ReportContext, narrative: &str) -> String {
    let ratios = compute_ratios(&context.financials);
    render_report_at(context, &ratios, narrative, fixed_clock()).unwrap()
}

fn section_lines(section: Section, context: &ReportContext, narrative: &str) -> Vec<String> {
    let ratios = compute_ratios(&context.financials);
    let doc = ReportDocument {
        context,
        ratios: &ratios,
        narrative,
        generated_at: fixed_clock(),
    };
    section.render(&doc)
}

#[test]
fn test_title_with_injected_clock() {
    let lines = section_lines(Section::Title, &context(), "");
    assert_eq!(
        lines,
        [
            "# Relatório Preliminar de Risco — Duplicata Escritural",
            "*Gerado em:* 2025-03-14T09:26:53.000000Z",
            "",
        ]
    );
}

#[test]
fn test_identification_is_verbatim() {
    let lines = section_lines(Section::Identification, &context(), "");
    assert_eq!(lines[1], "- **Empresa:** Distribuidora Boa Vista S.A.");
    assert_eq!(lines[2], "- **CNPJ:** 98.765.432/0001-10");
    assert_eq!(lines[3], "- **Setor / Região:** comercio / SP");
}

#[test]
fn test_receivable_section() {
    let lines = section_lines(Section::Receivable, &context(), "");
    assert_eq!(
        lines,
        [
            "## 2) Recebível (Duplicata)",
            "- **Tipo:** duplicata_escritural",
            "- **Valor:** R$ 1.234,50",
            "- **Prazo:** 90 dias",
            "",
        ]
    );
}

#[test]
fn test_behavioral_section() {
    let lines = section_lines(Section::Behavioral, &context(), "");
    assert_eq!(lines[1], "- **Histórico de pagamento:** irregular");
    assert_eq!(lines[2], "- **Eventos de inadimplência (últimos 12m):** 2");
}

#[test]
fn test_behavioral_defaults_when_absent() {
    let mut ctx = context();
    ctx.behavioral = BehavioralSignals::default();

    let lines = section_lines(Section::Behavioral, &ctx, "");
    assert_eq!(lines[1], "- **Histórico de pagamento:** unknown");
    assert_eq!(lines[2], "- **Eventos de inadimplência (últimos 12m):** 0");
}

#[test]
fn test_financial_summary_currency() {
    let lines = section_lines(Section::FinancialSummary, &context(), "");
    assert_eq!(
        lines,
        [
            "## 4) Resumo Financeiro (input)",
            "- **Receita (12m):** R$ 100.000,00",
            "- **Custos (COGS):** R$ 60.000,00",
            "- **Despesas operacionais (Opex):** R$ 20.000,00",
            "- **Ativo circulante:** R$ 50.000,00",
            "- **Passivo circulante:** R$ 25.000,00",
            "- **Ativo total:** R$ 200.000,00",
            "- **Passivo total:** R$ 80.000,00",
            "- **Patrimônio líquido:** R$ 120.000,00",
            "",
        ]
    );
}

#[test]
fn test_ratio_table_reference_scenario() {
    let lines = section_lines(Section::RatioTable, &context(), "");
    assert_eq!(
        lines,
        [
            "## 5) Indicadores Financeiros (calculados)",
            "| Indicador | Valor | Interpretação rápida |",
            "|---|---:|---|",
            "| Margem Bruta | 40.0% | quanto sobra após custos diretos |",
            "| Margem EBIT | 20.0% | eficiência operacional (antes de juros/impostos) |",
            "| Liquidez Corrente | 2.00 | >1 tende a indicar folga de curto prazo |",
            "| Dívida / Ativos | 0.40 | parcela dos ativos financiada por dívida |",
            "| Dívida / Patrimônio | 0.67 | alavancagem (cuidado se muito alto) |",
            "| Opex / Receita | 20.0% | peso das despesas operacionais |",
            "",
        ]
    );
}

#[test]
fn test_ratio_display_rules() {
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::GrossMargin),
        RatioDisplay::Percent
    );
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::EbitMargin),
        RatioDisplay::Percent
    );
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::OpexRatio),
        RatioDisplay::Percent
    );
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::CurrentRatio),
        RatioDisplay::Plain
    );
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::DebtToAssets),
        RatioDisplay::Plain
    );
    assert_eq!(
        RatioDisplay::for_ratio(RatioName::DebtToEquity),
        RatioDisplay::Plain
    );
}

#[test]
fn test_negative_equity_row() {
    let mut ctx = context();
    ctx.financials.equity = -100.0;
    ctx.financials.liabilities_total = 50.0;

    let lines = section_lines(Section::RatioTable, &ctx, "");
    assert!(lines.contains(&"| Dívida / Patrimônio | -0.50 | alavancagem (cuidado se muito alto) |".to_string()));
}

#[test]
fn test_narrative_trimmed_and_verbatim() {
    let narrative = "\n\n  risk_level: medio\nresumo_executivo: ok\n- **bold** `code`  \n\n";
    let lines = section_lines(Section::Narrative, &context(), narrative);
    assert_eq!(lines[0], "## 6) Interpretação por IA Generativa");
    assert!(lines[1].starts_with("> **Nota:**"));
    assert!(lines[1].contains("preliminar"));
    assert_eq!(lines[2], "");
    assert_eq!(
        lines[3],
        "risk_level: medio\nresumo_executivo: ok\n- **bold** `code`"
    );
}

#[test]
fn test_closing_disclaimer() {
    let lines = section_lines(Section::Disclaimer, &context(), "");
    assert_eq!(lines[0], "## 7) Aviso");
    assert!(lines[1].contains("preliminar"));
    assert!(lines[1].contains("validação humana"));
}

#[test]
fn test_full_report_sections_in_order() {
    let report = render(&context(), "risk_level: baixo");

    let mut last = 0;
    for section in Section::ALL {
        let header = section.header();
        assert_eq!(report.matches(header).count(), 1, "{header}");
        let pos = report.find(header).unwrap();
        assert!(pos >= last, "{header} out of order");
        last = pos;
    }
    assert!(report.starts_with(Section::Title.header()));
    assert!(report.ends_with('\n'));
}

#[test]
fn test_render_report_uses_current_time() {
    let ctx = context();
    let ratios = compute_ratios(&ctx.financials);
    let report = render_report(&ctx, &ratios, "texto").unwrap();

    let stamp_line = report.lines().nth(1).unwrap();
    let stamp = stamp_line.strip_prefix("*Gerado em:* ").unwrap();
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok(), "{stamp}");
}

#[test]
fn test_rendering_is_deterministic_with_fixed_clock() {
    let ctx = context();
    assert_eq!(render(&ctx, "abc"), render(&ctx, "abc"));
}

#[test]
fn test_blank_identification_renders_verbatim() {
    let mut raw = payload();
    raw["company"]["name"] = json!("");
    raw["company"]["sector"] = json!("  ");
    let app = CreditApplication::from_value(raw).unwrap();
    let ctx = ReportContext::from(&app);
    let ratios = compute_ratios(&ctx.financials);

    let report = render_report_at(&ctx, &ratios, "ok", fixed_clock()).unwrap();
    assert!(report.lines().any(|l| l == "- **Empresa:** "));
    assert!(report.lines().any(|l| l == "- **Setor / Região:**    / SP"));
}

#[test]
fn test_from_payload_without_behavioral() {
    let mut raw = payload();
    raw.as_object_mut().unwrap().remove("behavioral");

    let ctx = ReportContext::from_payload(&raw).unwrap();
    assert_eq!(ctx.behavioral, BehavioralSignals::default());

    let report = render(&ctx, "");
    assert!(report.contains("- **Histórico de pagamento:** unknown"));
    assert!(report.contains("- **Eventos de inadimplência (últimos 12m):** 0"));
}

#[test]
fn test_from_payload_without_payment_history() {
    let mut raw = payload();
    raw["behavioral"]
        .as_object_mut()
        .unwrap()
        .remove("payment_history");

    let ctx = ReportContext::from_payload(&raw).unwrap();
    assert_eq!(ctx.behavioral.payment_history, None);
    assert_eq!(ctx.behavioral.delinquency_events, Some(2));
    assert_eq!(ctx.behavioral.payment_history_or_default(), "unknown");
}

#[test]
fn test_from_payload_matches_typed_context() {
    let from_raw = ReportContext::from_payload(&payload()).unwrap();
    assert_eq!(from_raw, context());
}

#[test]
fn test_from_payload_missing_company() {
    let mut raw = payload();
    raw.as_object_mut().unwrap().remove("company");

    let err = ReportContext::from_payload(&raw).unwrap_err();
    assert!(matches!(err, ReportError::MalformedInput(ref f) if f == "company"));
}

#[test]
fn test_from_payload_missing_tax_id() {
    let mut raw = payload();
    raw["company"].as_object_mut().unwrap().remove("cnpj");

    let err = ReportContext::from_payload(&raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed input: missing required field `company.cnpj`"
    );
}

#[test]
fn test_from_payload_mistyped_amount() {
    let mut raw = payload();
    raw["receivable"]["amount"] = json!("muito");

    let err = ReportContext::from_payload(&raw).unwrap_err();
    assert!(matches!(err, ReportError::MalformedInput(ref f) if f == "receivable.amount"));
}

proptest! {
    /// Every header appears exactly once whatever the numbers are.
    #[test]
    fn test_headers_exactly_once(
        revenue in 0.0f64..1e10,
        cogs in 0.0f64..1e10,
        equity in -1e10f64..1e10,
        amount in 0.0f64..1e9,
        due_days in 0u32..=365,
        events in proptest::option::of(0u32..=100),
    ) {
        let mut ctx = context();
        ctx.financials.revenue = revenue;
        ctx.financials.cogs = cogs;
        ctx.financials.equity = equity;
        ctx.receivable.amount = amount;
        ctx.receivable.due_days = due_days;
        ctx.behavioral.delinquency_events = events;

        let report = render(&ctx, "risk_level: alto");
        for section in Section::ALL {
            prop_assert_eq!(report.matches(section.header()).count(), 1);
        }
    }
}
