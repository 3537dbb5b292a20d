use contracts::domain::a002_classification_result::{ClassificationResult, ResultField};
use leptos::prelude::*;

/// Width of the confidence bar; an unknown confidence draws an empty bar
pub fn confidence_bar_style(result: &ClassificationResult) -> String {
    let pct = result.confidence_ratio_percent().unwrap_or(0.0);
    format!("width: {:.1}%;", pct)
}

const UNKNOWN_LABEL: &str = "Unknown item";

/// Everything the result card shows, derived from the response
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub label: String,
    pub confidence: Option<String>,
    pub bar_style: String,
    pub fields: Vec<ResultField>,
    pub raw: String,
}

impl ResultSummary {
    pub fn from_result(result: &ClassificationResult) -> Self {
        Self {
            label: result.label().unwrap_or(UNKNOWN_LABEL).to_string(),
            confidence: result.confidence_percent(),
            bar_style: confidence_bar_style(result),
            fields: result.fields(),
            raw: result.to_pretty_json(),
        }
    }
}

#[component]
pub fn ResultCard(result: ClassificationResult) -> impl IntoView {
    let ResultSummary {
        label,
        confidence,
        bar_style,
        fields,
        raw,
    } = ResultSummary::from_result(&result);

    let rows = fields
        .into_iter()
        .map(|field| {
            view! {
                <tr>
                    <th>{field.key}</th>
                    <td>{field.display}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="result-card">
            <h3 class="result-card__title">"Result"</h3>
            <div class="result-card__label">{label}</div>
            {confidence.map(|pct| {
                view! {
                    <div class="result-card__confidence">
                        <div class="confidence-bar">
                            <div class="confidence-bar__fill" style=bar_style></div>
                        </div>
                        <span class="confidence-bar__value">{pct}</span>
                    </div>
                }
            })}
            <table class="result-card__fields">
                <tbody>{rows}</tbody>
            </table>
            <details class="result-card__raw">
                <summary>"Raw response"</summary>
                <pre>{raw}</pre>
            </details>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confidence_bar_style() {
        let result = ClassificationResult::new(json!({"label": "shoe", "confidence": 0.92}));
        assert_eq!(confidence_bar_style(&result), "width: 92.0%;");

        let missing = ClassificationResult::new(json!({"label": "shoe"}));
        assert_eq!(confidence_bar_style(&missing), "width: 0.0%;");

        let garbage = ClassificationResult::new(json!({"confidence": "very"}));
        assert_eq!(confidence_bar_style(&garbage), "width: 0.0%;");
    }

    #[test]
    fn test_summary_of_label_response() {
        let result = ClassificationResult::from_json(r#"{"label":"shoe","confidence":0.92}"#).unwrap();
        let summary = ResultSummary::from_result(&result);

        assert_eq!(summary.label, "shoe");
        assert_eq!(summary.confidence.as_deref(), Some("92.0%"));
        assert_eq!(summary.bar_style, "width: 92.0%;");
        assert_eq!(summary.fields.len(), 2);
        for (key, display) in [("label", "shoe"), ("confidence", "0.92")] {
            assert!(
                summary
                    .fields
                    .contains(&ResultField {
                        key: key.to_string(),
                        display: display.to_string()
                    }),
                "{key}"
            );
        }
        assert!(summary.raw.contains("\"label\": \"shoe\""));
    }

    #[test]
    fn test_summary_without_known_fields() {
        let result = ClassificationResult::new(json!({"top3": ["Shirt", "T-shirt/top", "Pullover"]}));
        let summary = ResultSummary::from_result(&result);

        assert_eq!(summary.label, "Unknown item");
        assert_eq!(summary.confidence, None);
        assert_eq!(summary.fields.len(), 1);
        assert_eq!(summary.fields[0].key, "top3");
    }
}
