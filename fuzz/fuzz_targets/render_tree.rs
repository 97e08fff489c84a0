//! Fuzz harness for the tree renderer
//!
//! Renders arbitrary tree shapes in both modes and checks the output is
//! well formed: every stored value appears, and the SVG document stays
//! balanced. Mostly here to prove rendering never panics on odd shapes.

#![no_main]

use libfuzzer_sys::fuzz_target;

use arbor_avl::Avl;
use arbor_bst::Bst;
use arbor_ports::Tree;
use arbor_render::{RenderMode, render};

fuzz_target!(|data: &[u8]| {
    let mut bst = Bst::new();
    let mut avl = Avl::new();
    for &b in data {
        let value = i64::from(b as i8);
        bst.insert(value);
        avl.insert(value);
    }

    for tree in [&bst as &dyn Tree<i64>, &avl as &dyn Tree<i64>] {
        let ascii = render(tree, RenderMode::Ascii);
        if tree.is_empty() {
            assert!(ascii.is_empty());
            continue;
        }
        assert!(ascii.ends_with('\n'));

        let svg = render(tree, RenderMode::Svg);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), tree.len());
        assert!(svg.trim_end().ends_with("</svg>"));
    }
});
