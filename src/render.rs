use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as indented text, one key per line, with
/// the right subtree above its parent and the left subtree below.
pub(crate) fn render<K>(n: &Node<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();
    recurse(n, "", true, &mut buf);
    buf
}

fn recurse<K, W>(n: &Node<K>, prefix: &str, is_left: bool, buf: &mut W)
where
    K: Display,
    W: Write,
{
    if let Some(right) = n.right() {
        let p = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        recurse(right, &p, false, buf);
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(buf, "{prefix}{connector}{}", n.key()).unwrap();

    if let Some(left) = n.left() {
        let p = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        recurse(left, &p, true, buf);
    }
}
