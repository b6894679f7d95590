use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::contour::Shape;
use crate::path::builder::parse_shape;

/// Node of a loaded artwork tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ArtworkNode {
    Group(Vec<ArtworkNode>),
    Path(Shape),
}

/// Vector artwork reduced to groups and paths.
#[derive(Clone, Debug, PartialEq)]
pub struct Artwork {
    pub root: ArtworkNode,
}

impl Artwork {
    /// All shapes, depth-first in document order.
    pub fn shapes(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        collect_shapes(&self.root, &mut out);
        out
    }
}

fn collect_shapes<'a>(node: &'a ArtworkNode, out: &mut Vec<&'a Shape>) {
    match node {
        ArtworkNode::Group(children) => {
            for child in children {
                collect_shapes(child, out);
            }
        }
        ArtworkNode::Path(shape) => out.push(shape),
    }
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_artwork(path: &Path) -> RevealResult<Artwork> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read artwork '{}'", path.display()))
        .map_err(|e| RevealError::geometry_load(format!("{e:#}")))?;
    let artwork = parse_artwork(&text)?;
    tracing::debug!(shapes = artwork.shapes().len(), "artwork loaded");
    Ok(artwork)
}

/// Parses an `svg` document restricted to `svg`, `g` and `path` elements.
pub fn parse_artwork(text: &str) -> RevealResult<Artwork> {
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| RevealError::geometry_load(format!("malformed artwork document: {e}")))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(RevealError::geometry_load(format!(
            "artwork root must be <svg>, found <{}>",
            root.tag_name().name()
        )));
    }
    Ok(Artwork {
        root: convert(root)?,
    })
}

fn convert(node: roxmltree::Node<'_, '_>) -> RevealResult<ArtworkNode> {
    match node.tag_name().name() {
        "svg" | "g" => {
            let children = node
                .children()
                .filter(|n| n.is_element())
                .map(convert)
                .collect::<RevealResult<Vec<_>>>()?;
            Ok(ArtworkNode::Group(children))
        }
        "path" => {
            let d = node
                .attribute("d")
                .ok_or_else(|| RevealError::geometry_load("<path> without a 'd' attribute"))?;
            Ok(ArtworkNode::Path(parse_shape(d)?))
        }
        other => Err(RevealError::unsupported_node(other)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/artwork.rs"]
mod tests;
