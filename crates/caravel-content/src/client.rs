use serde::{Deserialize, Serialize};
use tracing::debug;

use caravel_model::{Cursor, Page, page};

use crate::{BearerAuth, ContentError};

const API_VERSION: &str = "2021-08-16";
const PAGE_SIZE: u32 = 10;

/// One node of the remote block hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub has_children: bool,
    /// Id of the block this one was found under; filled in during the walk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlockList {
    results: Vec<Block>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<Cursor>,
}

fn to_page(list: BlockList) -> Page<Block> {
    // The API reports a cursor even on the last page sometimes; has_more is
    // the authoritative continuation flag.
    let next = if list.has_more { list.next_cursor } else { None };
    Page {
        items: list.results,
        next,
    }
}

/// Client for a hierarchical content API with cursor-paginated children
/// listings. Peripheral to the orchestrator, but drives the same forward
/// pagination primitive as the log reader.
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    auth: BearerAuth,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>, auth: BearerAuth) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            auth,
        }
    }

    /// Walks the hierarchy below `root`, returning leaf blocks tagged with
    /// the id of the block they were found under.
    ///
    /// Iterative walk over an explicit stack; each level is drained through
    /// the shared pagination primitive before its children are visited.
    pub async fn fetch_tree(&self, root: &str) -> Result<Vec<Block>, ContentError> {
        let mut leaves = Vec::new();
        let mut stack = vec![root.to_string()];
        while let Some(parent) = stack.pop() {
            let children = page::drain(|cursor| self.children_page(&parent, cursor)).await?;
            debug!(block = %parent, children = children.len(), "listed children");
            for block in children {
                if block.has_children {
                    stack.push(block.id.clone());
                } else {
                    leaves.push(Block {
                        parent: Some(parent.clone()),
                        ..block
                    });
                }
            }
        }
        Ok(leaves)
    }

    /// Runs a structured query against a database block.
    pub async fn query_database(
        &self,
        database_id: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ContentError> {
        let url = format!("{}/v1/databases/{database_id}/query", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("Authorization", self.auth.header_value())
            .header("Notion-Version", API_VERSION)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }

    async fn children_page(
        &self,
        block_id: &str,
        cursor: Option<Cursor>,
    ) -> Result<Page<Block>, ContentError> {
        let mut url = format!(
            "{}/v1/blocks/{block_id}/children?page_size={PAGE_SIZE}",
            self.base_url
        );
        if let Some(cursor) = &cursor {
            url.push_str(&format!("&start_cursor={cursor}"));
        }
        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth.header_value())
            .header("Content-Type", "application/json")
            .header("Notion-Version", API_VERSION)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }
        let list: BlockList = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        Ok(to_page(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_list_decodes_wire_shape() {
        let json = r#"{
            "object": "list",
            "results": [
                {"id": "b1", "type": "paragraph", "has_children": false},
                {"id": "b2", "type": "child_database", "has_children": true}
            ],
            "has_more": true,
            "next_cursor": "cur-2"
        }"#;
        let list: BlockList = serde_json::from_str(json).unwrap();
        assert_eq!(list.results.len(), 2);
        assert!(list.results[1].has_children);
        assert_eq!(list.next_cursor.as_deref(), Some("cur-2"));
    }

    #[test]
    fn page_continues_only_while_has_more() {
        let more = BlockList {
            results: vec![],
            has_more: true,
            next_cursor: Some("cur".into()),
        };
        assert_eq!(to_page(more).next.as_deref(), Some("cur"));

        // Trailing cursor on the final page must be discarded.
        let last = BlockList {
            results: vec![],
            has_more: false,
            next_cursor: Some("stale".into()),
        };
        assert!(to_page(last).next.is_none());
    }

    #[test]
    fn missing_continuation_fields_default_to_end() {
        let json = r#"{"results": []}"#;
        let list: BlockList = serde_json::from_str(json).unwrap();
        let page = to_page(list);
        assert!(page.items.is_empty());
        assert!(page.next.is_none());
    }
}
