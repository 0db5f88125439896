use std::fmt;

/// AST (Abstract Syntax Tree) node - the closed set of syntactic shapes
/// the parser can produce
///
/// Nodes are immutable after construction: there is no mutation API, and a
/// `List` owns its children exclusively. Transformations build new trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number { value: f64 },
    Symbol { name: String },
    Boolean { value: bool },
    List { elements: Vec<Node> },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number { value }
    }

    pub fn new_symbol(name: &str) -> Node {
        Node::Symbol { name: name.to_string() }
    }

    pub fn new_boolean(value: bool) -> Node {
        Node::Boolean { value }
    }

    pub fn new_list(elements: Vec<Node>) -> Node {
        Node::List { elements }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number { value } => write!(f, "{}", value),
            Node::Symbol { name } => write!(f, "{}", name),
            Node::Boolean { value } => write!(f, "{}", if *value { "#t" } else { "#f" }),
            Node::List { elements } => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ast_is_constructable() {
        assert_eq!(
            Node::new_list(vec![Node::new_symbol("+"), Node::new_number(1.0)]),
            Node::List {
                elements: vec![
                    Node::Symbol { name: "+".to_string() },
                    Node::Number { value: 1.0 },
                ]
            }
        );
        assert_eq!(Node::new_boolean(true), Node::Boolean { value: true });
    }

    #[test]
    fn empty_list_is_a_valid_node() {
        assert_eq!(Node::new_list(vec![]), Node::List { elements: vec![] });
    }

    #[test]
    fn display_renders_atoms() {
        assert_eq!(Node::new_number(1.0).to_string(), "1");
        assert_eq!(Node::new_number(3.14).to_string(), "3.14");
        assert_eq!(Node::new_number(-42.0).to_string(), "-42");
        assert_eq!(Node::new_symbol("lambda").to_string(), "lambda");
        assert_eq!(Node::new_boolean(true).to_string(), "#t");
        assert_eq!(Node::new_boolean(false).to_string(), "#f");
    }

    #[test]
    fn display_renders_nested_lists() {
        let tree = Node::new_list(vec![
            Node::new_symbol("+"),
            Node::new_number(1.0),
            Node::new_list(vec![
                Node::new_symbol("*"),
                Node::new_number(2.0),
                Node::new_number(3.0),
            ]),
        ]);
        assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
        assert_eq!(Node::new_list(vec![]).to_string(), "()");
    }
}
