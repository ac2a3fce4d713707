//! Typed report sections.

use chrono::{DateTime, Utc};

use super::context::ReportContext;
use super::format::{format_currency, format_percent, format_ratio};
use crate::ratios::{RatioName, RatioSet};

/// Inputs shared by every section renderer.
#[derive(Debug, Clone, Copy)]
pub struct ReportDocument<'a> {
    /// Company, statement, receivable and behavioral data.
    pub context: &'a ReportContext,
    /// Computed ratios.
    pub ratios: &'a RatioSet,
    /// Externally generated narrative, inserted verbatim.
    pub narrative: &'a str,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Report sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Title and generation timestamp.
    Title,
    /// Company identification.
    Identification,
    /// Receivable terms.
    Receivable,
    /// Behavioral signals.
    Behavioral,
    /// Raw financial statement.
    FinancialSummary,
    /// Computed ratios.
    RatioTable,
    /// Generated narrative.
    Narrative,
    /// Closing disclaimer.
    Disclaimer,
}

impl Section {
    /// All sections in the order they appear in the report.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Identification,
        Self::Receivable,
        Self::Behavioral,
        Self::FinancialSummary,
        Self::RatioTable,
        Self::Narrative,
        Self::Disclaimer,
    ];

    /// The section's header line.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Title => "# Relatório Preliminar de Risco — Duplicata Escritural",
            Self::Identification => "## 1) Identificação",
            Self::Receivable => "## 2) Recebível (Duplicata)",
            Self::Behavioral => "## 3) Sinais Comportamentais",
            Self::FinancialSummary => "## 4) Resumo Financeiro (input)",
            Self::RatioTable => "## 5) Indicadores Financeiros (calculados)",
            Self::Narrative => "## 6) Interpretação por IA Generativa",
            Self::Disclaimer => "## 7) Aviso",
        }
    }

    /// Renders the section as lines, header first, followed by one blank line.
    #[must_use]
    pub fn render(self, doc: &ReportDocument<'_>) -> Vec<String> {
        let mut lines = vec![self.header().to_string()];
        match self {
            Self::Title => title(doc, &mut lines),
            Self::Identification => identification(doc, &mut lines),
            Self::Receivable => receivable(doc, &mut lines),
            Self::Behavioral => behavioral(doc, &mut lines),
            Self::FinancialSummary => financial_summary(doc, &mut lines),
            Self::RatioTable => ratio_table(doc, &mut lines),
            Self::Narrative => narrative(doc, &mut lines),
            Self::Disclaimer => disclaimer(&mut lines),
        }
        lines.push(String::new());
        lines
    }
}

/// How a ratio value is displayed in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioDisplay {
    /// Percentage with one decimal place.
    Percent,
    /// Plain decimal with two places.
    Plain,
}

impl RatioDisplay {
    /// Display rule for a ratio.
    #[must_use]
    pub const fn for_ratio(name: RatioName) -> Self {
        match name {
            RatioName::GrossMargin | RatioName::EbitMargin | RatioName::OpexRatio => {
                Self::Percent
            }
            RatioName::CurrentRatio | RatioName::DebtToAssets | RatioName::DebtToEquity => {
                Self::Plain
            }
        }
    }

    /// Formats a value under this rule.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Percent => format_percent(value),
            Self::Plain => format_ratio(value),
        }
    }
}

/// Table label and static interpretation for a ratio.
const fn ratio_labels(name: RatioName) -> (&'static str, &'static str) {
    match name {
        RatioName::GrossMargin => ("Margem Bruta", "quanto sobra após custos diretos"),
        RatioName::EbitMargin => (
            "Margem EBIT",
            "eficiência operacional (antes de juros/impostos)",
        ),
        RatioName::CurrentRatio => (
            "Liquidez Corrente",
            ">1 tende a indicar folga de curto prazo",
        ),
        RatioName::DebtToAssets => ("Dívida / Ativos", "parcela dos ativos financiada por dívida"),
        RatioName::DebtToEquity => ("Dívida / Patrimônio", "alavancagem (cuidado se muito alto)"),
        RatioName::OpexRatio => ("Opex / Receita", "peso das despesas operacionais"),
    }
}

const NARRATIVE_NOTE: &str =
    "> **Nota:** A IA fornece um **risco preliminar** e recomendações. A decisão final é humana.";

const CLOSING_DISCLAIMER: &str = "Este documento é preliminar e foi gerado automaticamente. \
Ele não constitui decisão de crédito e requer validação humana antes de qualquer uso.";

fn title(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    lines.push(format!(
        "*Gerado em:* {}",
        doc.generated_at.format("%Y-%m-%dT%H:%M:%S%.6fZ")
    ));
}

fn identification(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    let company = &doc.context.company;
    lines.push(format!("- **Empresa:** {}", company.name));
    lines.push(format!("- **CNPJ:** {}", company.cnpj));
    lines.push(format!(
        "- **Setor / Região:** {} / {}",
        company.sector, company.region
    ));
}

fn receivable(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    let rec = &doc.context.receivable;
    lines.push(format!("- **Tipo:** {}", rec.kind));
    lines.push(format!("- **Valor:** {}", format_currency(rec.amount)));
    lines.push(format!("- **Prazo:** {} dias", rec.due_days));
}

fn behavioral(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    let beh = &doc.context.behavioral;
    lines.push(format!(
        "- **Histórico de pagamento:** {}",
        beh.payment_history_or_default()
    ));
    lines.push(format!(
        "- **Eventos de inadimplência (últimos {}m):** {}",
        doc.context.financials.period_months,
        beh.delinquency_events_or_default()
    ));
}

fn financial_summary(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    let fin = &doc.context.financials;
    let revenue_label = format!("Receita ({}m)", fin.period_months);
    let rows: [(&str, f64); 8] = [
        (&revenue_label, fin.revenue),
        ("Custos (COGS)", fin.cogs),
        ("Despesas operacionais (Opex)", fin.operating_expenses),
        ("Ativo circulante", fin.assets_current),
        ("Passivo circulante", fin.liabilities_current),
        ("Ativo total", fin.assets_total),
        ("Passivo total", fin.liabilities_total),
        ("Patrimônio líquido", fin.equity),
    ];
    for (label, value) in rows {
        lines.push(format!("- **{label}:** {}", format_currency(value)));
    }
}

fn ratio_table(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    lines.push("| Indicador | Valor | Interpretação rápida |".to_string());
    lines.push("|---|---:|---|".to_string());
    for (name, value) in doc.ratios.iter() {
        let (label, hint) = ratio_labels(name);
        let shown = RatioDisplay::for_ratio(name).format(value);
        lines.push(format!("| {label} | {shown} | {hint} |"));
    }
}

fn narrative(doc: &ReportDocument<'_>, lines: &mut Vec<String>) {
    lines.push(NARRATIVE_NOTE.to_string());
    lines.push(String::new());
    lines.push(doc.narrative.trim().to_string());
}

fn disclaimer(lines: &mut Vec<String>) {
    lines.push(CLOSING_DISCLAIMER.to_string());
}
