//! Common host documents for tests.

/// Two scopes and a dependent type definition.
pub const SCOPES: &str = r#"import {scope, type} from "arktype";

// Define a scope with type aliases
const coolScope = scope({
    // Type aliases that should be available for completion within the scope
    Id: "string",
    User: { id: "Id", friends: "Id[]" },
    UsersById: {
        "[Id]": "User | undefined"
    }
})

// Using the scope to create a type
const group = coolScope.type({
    name: "string",
    members: "User[]"
})

// Another scope with different aliases
const anotherScope = scope({
    Email: "string.email",
    Person: {
        name: "string",
        email: "Email"
    }
})
"#;

/// A single scope on one line.
pub const ONE_LINE_SCOPE: &str =
    r#"const coolScope = scope({ Id: "string", User: { id: "Id", friends: "Id[]" } })"#;

/// A quoted `{` inside the scope body ends brace counting early.
pub const BRACE_IN_STRING: &str = r#"const s = scope({
    Open: "{",
    Later: "string"
})
const t = type({ ref: "Later" })
"#;

/// Aliases declared with quoted keys only.
pub const QUOTED_KEYS: &str = r#"const s = scope({ "Quoted": "string" })
const t = s.type({ ref: "Quoted" })
"#;

/// Deeply nested braces around a name.
pub fn nested_braces(depth: usize, inner: &str) -> String {
    format!("{}{}{}", "{ ".repeat(depth), inner, " }".repeat(depth))
}
