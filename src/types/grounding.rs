use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Citation attached to a generation response. Carries a web reference, a place
/// reference, or (in principle) both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<PlaceSource>,
}

/// Web page used to ground the answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WebSource {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

/// Map place used to ground the answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSource {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_answer_sources: Option<PlaceAnswerSources>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceAnswerSources {
    #[serde(default)]
    pub review_snippets: Vec<ReviewSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewSnippet {
    #[serde(default, alias = "googleMapsUri")]
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Web,
    Place,
}

/// A single link ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationLink {
    pub kind: CitationKind,
    pub uri: String,
    pub label: String,
}

impl GroundingChunk {
    /// Flatten this chunk into display links.
    ///
    /// A web chunk yields one link labelled with its title (or the URI when the title
    /// is empty). A place chunk yields its own URI followed by every review snippet URI,
    /// all labelled with the place title.
    pub fn links(&self) -> Vec<CitationLink> {
        if let Some(web) = &self.web {
            return vec![CitationLink {
                kind: CitationKind::Web,
                uri: web.uri.clone(),
                label: label_or_uri(&web.title, &web.uri),
            }];
        }

        let Some(place) = &self.maps else {
            return Vec::new();
        };

        let review_uris = place
            .place_answer_sources
            .iter()
            .flat_map(|sources| sources.review_snippets.iter())
            .map(|snippet| snippet.uri.as_str());

        std::iter::once(place.uri.as_str())
            .chain(review_uris)
            .map(|uri| CitationLink {
                kind: CitationKind::Place,
                uri: uri.to_string(),
                label: label_or_uri(&place.title, uri),
            })
            .collect()
    }
}

/// Flatten a citation list into display links, preserving order.
pub fn citation_links(chunks: &[GroundingChunk]) -> Vec<CitationLink> {
    chunks.iter().flat_map(GroundingChunk::links).collect()
}

fn label_or_uri(title: &str, uri: &str) -> String {
    if title.is_empty() {
        uri.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_web_chunk_falls_back_to_uri() {
        let chunk: GroundingChunk = serde_json::from_value(json!({
            "web": { "uri": "https://example.com/bali" }
        }))
        .unwrap();

        let links = chunk.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, CitationKind::Web);
        assert_eq!(links[0].label, "https://example.com/bali");
    }

    #[test]
    fn test_place_chunk_includes_review_snippets() {
        let chunk: GroundingChunk = serde_json::from_value(json!({
            "maps": {
                "uri": "https://maps.example.com/place/1",
                "title": "Tanah Lot",
                "placeAnswerSources": {
                    "reviewSnippets": [
                        { "googleMapsUri": "https://maps.example.com/review/1", "title": "Great" },
                        { "uri": "https://maps.example.com/review/2" }
                    ]
                }
            }
        }))
        .unwrap();

        let links = chunk.links();
        let uris: Vec<&str> = links.iter().map(|link| link.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec![
                "https://maps.example.com/place/1",
                "https://maps.example.com/review/1",
                "https://maps.example.com/review/2",
            ]
        );
        assert!(links.iter().all(|link| link.label == "Tanah Lot"));
    }

    #[test]
    fn test_empty_chunk_has_no_links() {
        assert!(GroundingChunk::default().links().is_empty());
        assert!(citation_links(&[]).is_empty());
    }
}
