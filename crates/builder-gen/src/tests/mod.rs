use crate::decl::{DeclKind, Declaration, Member};

mod source;

fn user_declaration() -> Declaration {
  Declaration::builder()
    .kind(DeclKind::Struct)
    .name("User")
    .members(vec![
      Member::stored("uuid", "Uuid"),
      Member::stored("name", "String"),
      Member::stored("age", "Option<String>"),
    ])
    .build()
}
