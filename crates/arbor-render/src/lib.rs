//! Debug rendering for arbor trees.
//!
//! Renders any tree through the read-only [`TreeNode`] capability as either
//! ASCII art or a small SVG document. Layout is computed per render as a
//! pure function of the node values' display widths and depths: each node
//! takes the column of its in-order position, so siblings never collide and
//! an unbalanced tree simply leans.
//!
//! Each level prints a row of values, a row of metadata when any node on
//! that level has some (balance factors, colors), and a row of connecting
//! legs. Rendering never mutates the tree.

use std::fmt;

use arbor_ports::{Tree, TreeNode};

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Ascii,
    Svg,
}

/// A node pinned to its layout position: `col` is the in-order index,
/// `depth` the distance from the root.
struct PlacedNode {
    depth: usize,
    col: usize,
    value: String,
    metadata: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Flattens the tree into placed nodes. Returns the node list; the root, if
/// present, is the last entry pushed at depth 0.
fn layout<T: fmt::Display>(root: Option<&dyn TreeNode<T>>) -> Vec<PlacedNode> {
    let mut nodes = Vec::new();
    let mut next_col = 0;
    if let Some(node) = root {
        place(node, 0, &mut next_col, &mut nodes);
    }
    nodes
}

fn place<T: fmt::Display>(
    node: &dyn TreeNode<T>,
    depth: usize,
    next_col: &mut usize,
    out: &mut Vec<PlacedNode>,
) -> usize {
    let left = node.left().map(|l| place(l, depth + 1, next_col, out));
    let col = *next_col;
    *next_col += 1;
    out.push(PlacedNode {
        depth,
        col,
        value: node.value().to_string(),
        metadata: node.metadata(),
        left,
        right: None,
    });
    let index = out.len() - 1;
    if let Some(r) = node.right() {
        let right = place(r, depth + 1, next_col, out);
        out[index].right = Some(right);
    }
    index
}

/// Renders the whole tree in the requested mode. An empty tree renders as
/// an empty string.
pub fn render<T: fmt::Display>(tree: &dyn Tree<T>, mode: RenderMode) -> String {
    render_subtree(tree.root(), mode)
}

/// Renders the subtree at `root` in the requested mode.
pub fn render_subtree<T: fmt::Display>(root: Option<&dyn TreeNode<T>>, mode: RenderMode) -> String {
    let nodes = layout(root);
    if nodes.is_empty() {
        return String::new();
    }
    match mode {
        RenderMode::Ascii => render_ascii(&nodes),
        RenderMode::Svg => render_svg(&nodes),
    }
}

/// The column width: wide enough for the widest value or metadata string
/// plus a space of breathing room on each side.
fn cell_width(nodes: &[PlacedNode]) -> usize {
    nodes
        .iter()
        .flat_map(|n| [n.value.chars().count(), n.metadata.chars().count()])
        .max()
        .unwrap_or(1)
        .max(1)
        + 2
}

/// Writes `text` into the line with its midpoint at `center`, growing the
/// line with spaces as needed.
fn write_centered(line: &mut Vec<char>, center: usize, text: &str) {
    let chars: Vec<char> = text.chars().collect();
    let start = center.saturating_sub(chars.len() / 2);
    if line.len() < start + chars.len() {
        line.resize(start + chars.len(), ' ');
    }
    for (i, c) in chars.into_iter().enumerate() {
        line[start + i] = c;
    }
}

fn render_ascii(nodes: &[PlacedNode]) -> String {
    let cell = cell_width(nodes);
    let center = |col: usize| col * cell + cell / 2;
    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

    let mut out = String::new();
    for depth in 0..=max_depth {
        let level: Vec<&PlacedNode> = nodes.iter().filter(|n| n.depth == depth).collect();

        let mut value_line = Vec::new();
        for node in &level {
            write_centered(&mut value_line, center(node.col), &node.value);
        }
        push_line(&mut out, value_line);

        if level.iter().any(|n| !n.metadata.is_empty()) {
            let mut meta_line = Vec::new();
            for node in &level {
                write_centered(&mut meta_line, center(node.col), &node.metadata);
            }
            push_line(&mut out, meta_line);
        }

        if depth < max_depth {
            let mut leg_line = Vec::new();
            for node in &level {
                let from = center(node.col);
                if let Some(l) = node.left {
                    let mid = (from + center(nodes[l].col)) / 2;
                    write_centered(&mut leg_line, mid, "/");
                }
                if let Some(r) = node.right {
                    let mid = (from + center(nodes[r].col)) / 2;
                    write_centered(&mut leg_line, mid, "\\");
                }
            }
            push_line(&mut out, leg_line);
        }
    }
    out
}

fn push_line(out: &mut String, line: Vec<char>) {
    let text: String = line.into_iter().collect();
    out.push_str(text.trim_end());
    out.push('\n');
}

const SVG_X_STEP: usize = 48;
const SVG_Y_STEP: usize = 64;
const SVG_RADIUS: usize = 16;
const SVG_MARGIN: usize = 24;

fn render_svg(nodes: &[PlacedNode]) -> String {
    let cols = nodes.iter().map(|n| n.col).max().unwrap_or(0) + 1;
    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);
    let width = 2 * SVG_MARGIN + (cols - 1) * SVG_X_STEP;
    let height = 2 * SVG_MARGIN + max_depth * SVG_Y_STEP + SVG_RADIUS;
    let x = |col: usize| SVG_MARGIN + col * SVG_X_STEP;
    let y = |depth: usize| SVG_MARGIN + depth * SVG_Y_STEP;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));

    // Edges first so the node circles draw over them.
    for node in nodes {
        for child in [node.left, node.right].into_iter().flatten() {
            let child = &nodes[child];
            out.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\"/>\n",
                x(node.col),
                y(node.depth),
                x(child.col),
                y(child.depth),
            ));
        }
    }

    for node in nodes {
        let cx = x(node.col);
        let cy = y(node.depth);
        out.push_str(&format!(
            "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{SVG_RADIUS}\" fill=\"white\" stroke=\"black\"/>\n"
        ));
        out.push_str(&format!(
            "  <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            xml_escape(&node.value)
        ));
        if !node.metadata.is_empty() {
            out.push_str(&format!(
                "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-size=\"10\">{}</text>\n",
                cy + SVG_RADIUS + 12,
                xml_escape(&node.metadata)
            ));
        }
    }

    out.push_str("</svg>\n");
    out
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
