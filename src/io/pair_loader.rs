use std::path::Path;
use serde::{Serialize,Deserialize};
use log::warn;

use crate::io::{read_lines,parse_to_index};
use crate::{MvsError,Result,SceneId,ViewIndex};

#[derive(Debug,Clone,PartialEq)]
pub struct PairEntry {
    pub scene: SceneId,
    pub reference_view: ViewIndex,
    pub source_views: Vec<ViewIndex>,
    pub scene_key: SceneId
}

impl PairEntry {
    // The reference view followed by the first `target_view_count - 1` source views.
    pub fn view_ids(&self, target_view_count: usize) -> Vec<ViewIndex> {
        let source_count = target_view_count.saturating_sub(1).min(self.source_views.len());
        std::iter::once(self.reference_view).chain(self.source_views[..source_count].iter().copied()).collect()
    }
}

// What to do with a reference view that has fewer source views than a sample needs.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePadding {
    PadWithFirst,
    Reject
}

impl Default for SourcePadding {
    fn default() -> SourcePadding {
        SourcePadding::PadWithFirst
    }
}

impl SourcePadding {
    // Returns `None` when the entry should be dropped from the index.
    pub fn apply(&self, source_views: Vec<ViewIndex>, required: usize) -> Option<Vec<ViewIndex>> {
        if source_views.is_empty() {
            return None;
        }
        if source_views.len() >= required {
            return Some(source_views);
        }

        match self {
            SourcePadding::PadWithFirst => {
                warn!("{} source views < required: {}, padding with view {}", source_views.len(), required, source_views[0]);
                Some(pad_with_first(source_views, required))
            },
            SourcePadding::Reject => {
                warn!("{} source views < required: {}, dropping entry", source_views.len(), required);
                None
            }
        }
    }
}

pub fn pad_with_first(mut source_views: Vec<ViewIndex>, required: usize) -> Vec<ViewIndex> {
    if let Some(&first) = source_views.first() {
        while source_views.len() < required {
            source_views.push(first);
        }
    }
    source_views
}

// Line 0 holds the viewpoint count; every viewpoint is a reference id line followed by
// `M id_0 score_0 ... id_M-1 score_M-1`. Scores are skipped.
pub fn load_pairs(file_path: &Path) -> Result<Vec<(ViewIndex,Vec<ViewIndex>)>> {
    let lines = read_lines(file_path)?;
    let count_line = lines.first().ok_or_else(|| MvsError::format(file_path, "empty pair file"))?;
    let viewpoint_count = parse_to_index(count_line.trim(), file_path, 0)?;

    let expected_lines = 1 + 2*viewpoint_count;
    if lines.len() < expected_lines {
        return Err(MvsError::format(file_path, format!("{} viewpoints declared but only {} lines present", viewpoint_count, lines.len())));
    }

    let mut pairs = Vec::<(ViewIndex,Vec<ViewIndex>)>::with_capacity(viewpoint_count);
    for view_idx in 0..viewpoint_count {
        let reference_line_idx = 1 + 2*view_idx;
        let source_line_idx = reference_line_idx + 1;
        let reference_view = parse_to_index(lines[reference_line_idx].trim(), file_path, reference_line_idx)?;
        let source_views = lines[source_line_idx].split_whitespace()
            .skip(1)
            .step_by(2)
            .map(|token| parse_to_index(token, file_path, source_line_idx))
            .collect::<Result<Vec<ViewIndex>>>()?;
        pairs.push((reference_view,source_views));
    }

    Ok(pairs)
}

pub fn load_scene_entries(file_path: &Path, scene: &str, target_view_count: usize, padding: SourcePadding) -> Result<Vec<PairEntry>> {
    let required = target_view_count.saturating_sub(1);
    let entries = load_pairs(file_path)?.into_iter()
        .filter_map(|(reference_view, source_views)| {
            padding.apply(source_views, required).map(|source_views| PairEntry {
                scene: scene.to_string(),
                reference_view,
                source_views,
                scene_key: scene.to_string()
            })
        })
        .collect::<Vec<PairEntry>>();
    Ok(entries)
}
