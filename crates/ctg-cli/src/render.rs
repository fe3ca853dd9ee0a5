use std::io::{self, Write};

use ctg_graph::{ContigTree, Segment};

use crate::names::NamePool;

const BANNER_WIDTH: usize = 80;
const INDENT_PER_LEVEL: usize = 10;

/// `name_length_id`, the label used in both the FASTA header and the tree.
pub fn label(segment: &Segment, names: &NamePool) -> String {
    format!(
        "{}_{}_{}",
        names.name_for(segment.id),
        segment.len(),
        segment.id
    )
}

/// Center ` text ` in a line of `=`.
pub fn banner(text: &str) -> String {
    let text = format!(" {text} ");
    let pad = BANNER_WIDTH.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", "=".repeat(left), text, "=".repeat(pad - left))
}

/// One line per node, in visit order, indented by depth.
pub fn tree_lines(tree: &ContigTree, names: &NamePool) -> Vec<String> {
    tree.iter()
        .map(|node| {
            format!(
                "{}|->{}{}",
                " ".repeat(node.depth * INDENT_PER_LEVEL),
                label(&node.segment, names),
                if node.segment.is_reverse() { "(r)" } else { "" }
            )
        })
        .collect()
}

pub fn write_tree<W: Write>(out: &mut W, tree: &ContigTree, names: &NamePool) -> io::Result<()> {
    for line in tree_lines(tree, names) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Two-line FASTA record for each segment.
pub fn write_fasta<'a, W, I>(out: &mut W, segments: I, names: &NamePool) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Segment>,
{
    for segment in segments {
        writeln!(out, ">{}", label(segment, names))?;
        writeln!(out, "{}", segment.sequence)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ctg_graph::TreeBuilder;
    use ctg_store::InMemoryContigs;
    use ctg_types::{ContigId, Orientation};

    use super::*;

    fn seg(id: u64, orientation: Orientation, sequence: &str) -> Segment {
        Segment {
            id: ContigId::new(id),
            orientation,
            header: format!(">{id}"),
            sequence: sequence.into(),
        }
    }

    #[test]
    fn label_format() {
        let names = NamePool::default();
        assert_eq!(label(&seg(3, Orientation::Forward, "ACGTA"), &names), "Blackbird_5_3");
    }

    #[test]
    fn banner_is_centred() {
        let b = banner("Unique contigs: 3");
        assert_eq!(b.len(), 80);
        assert_eq!(b, format!("{} Unique contigs: 3 {}", "=".repeat(30), "=".repeat(31)));
    }

    #[test]
    fn banner_longer_than_width() {
        let long = "x".repeat(100);
        assert_eq!(banner(&long), format!(" {long} "));
    }

    #[test]
    fn tree_is_indented_and_marked() {
        let text = ">1 L:+:2:-\nAACG\n>2 L:-:3:+\nGGATC\n>3\nTTA\n";
        let tree = TreeBuilder::new(InMemoryContigs::new(text))
            .build(ContigId::new(1), 2, Orientation::Forward)
            .unwrap();
        let lines = tree_lines(&tree, &NamePool::default());
        assert_eq!(
            lines,
            vec![
                "|->Auklet_4_1".to_string(),
                format!("{}|->Bittern_5_2(r)", " ".repeat(10)),
                format!("{}|->Blackbird_3_3", " ".repeat(20)),
            ]
        );
    }

    #[test]
    fn fasta_output() {
        let segs = [seg(1, Orientation::Forward, "AC"), seg(86, Orientation::Reverse, "GTT")];
        let mut out = Vec::new();
        write_fasta(&mut out, &segs, &NamePool::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">Auklet_2_1\nAC\n>Auklet_3_86\nGTT\n"
        );
    }
}
