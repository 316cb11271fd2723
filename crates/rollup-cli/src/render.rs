//! Text and JSON rendering of results

use rollup_aggregate::SectorSummaries;
use rollup_model::{Company, Named};
use std::collections::BTreeMap;
use std::fmt::Write;

pub(crate) fn sectors(summaries: &SectorSummaries, json: bool) -> anyhow::Result<String> {
    // sorted for stable output
    let ordered: BTreeMap<_, _> = summaries.iter().collect();
    if json {
        return Ok(serde_json::to_string(&ordered)?);
    }

    let mut out = String::new();
    for (sector, summary) in ordered {
        let names: Vec<&str> = summary.collaborators.iter().map(Named::name).collect();
        writeln!(out, "{sector}: total {:.2} [{}]", summary.total, names.join(", "))?;
    }
    Ok(out.trim_end().to_owned())
}

pub(crate) fn companies(companies: Option<&[Company]>, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(&companies)?);
    }
    let Some(companies) = companies else {
        return Ok("no input".to_owned());
    };

    let list = |names: Option<&Vec<String>>| names.map_or_else(|| "-".to_owned(), |n| n.join(", "));
    let mut out = String::new();
    for company in companies {
        writeln!(
            out,
            "{}: collaborators: {}; offices: {}",
            company.company_id,
            list(company.collaborators.as_ref()),
            list(company.offices.as_ref())
        )?;
    }
    Ok(out.trim_end().to_owned())
}

pub(crate) fn states(states: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(states)?);
    }
    Ok(states.join("\n"))
}

pub(crate) fn terms(terms: &[u64], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string(terms)?);
    }
    let text: Vec<String> = terms.iter().map(u64::to_string).collect();
    Ok(text.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rollup_model::{Collaborator, SectorSummary};

    #[test]
    fn sectors_text_is_sorted_by_key() {
        let mut summaries = SectorSummaries::new();
        summaries.insert(
            "XTW04".to_owned(),
            SectorSummary::new(1.0, vec![Collaborator::in_sector("b", 1.0, "XTW04")]),
        );
        summaries.insert(
            "TTW01".to_owned(),
            SectorSummary::new(2.0, vec![Collaborator::in_sector("a", 2.0, "TTW01")]),
        );

        assert_eq!(
            sectors(&summaries, false).unwrap(),
            "TTW01: total 2.00 [a]\nXTW04: total 1.00 [b]"
        );
    }

    #[test]
    fn absent_companies() {
        assert_eq!(companies(None, false).unwrap(), "no input");
        assert_eq!(companies(None, true).unwrap(), "null");
    }

    #[test]
    fn company_json_keeps_absent_side() {
        let list = vec![Company::new("Meli Envios", Some(vec!["Paulo Gustavo".into()]), None)];
        assert_eq!(
            companies(Some(list.as_slice()), true).unwrap(),
            r#"[{"company_id":"Meli Envios","collaborators":["Paulo Gustavo"],"offices":null}]"#
        );
    }

    #[test]
    fn empty_terms() {
        assert_eq!(terms(&[], false).unwrap(), "");
        assert_eq!(terms(&[0, 1], true).unwrap(), "[0,1]");
    }
}
