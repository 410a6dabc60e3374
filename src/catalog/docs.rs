//! Descriptions shown for catalog words in hover and completion popups.

pub(super) const BUILTIN_DOCS: &[(&str, &str)] = &[
    // Builtin types
    ("string", "Validates that a value is a string."),
    ("number", "Validates that a value is a number."),
    ("boolean", "Validates that a value is a boolean."),
    ("object", "Validates that a value is an object."),
    ("array", "Validates that a value is an array."),
    ("Date", "Validates that a value is a Date object."),
    ("null", "Validates that a value is null."),
    ("undefined", "Validates that a value is undefined."),
    // Utilities
    ("Record", "Creates a type with specified keys and values."),
    ("Partial", "Makes all properties in a type optional."),
    ("Required", "Makes all properties in a type required."),
    ("Pick", "Constructs a type by picking the specified properties from a type."),
    ("Omit", "Constructs a type by omitting the specified properties from a type."),
    (
        "Exclude",
        "Constructs a type by excluding from a union type all types that are assignable to the specified type.",
    ),
    (
        "Extract",
        "Constructs a type by extracting from a union type all types that are assignable to the specified type.",
    ),
    // Subtypes
    ("date", "Validates that a string is a valid date format."),
    ("iso", "Validates that a string is in ISO date format."),
    ("parse", "Transforms a string into a Date object."),
    ("root", "Gets the base type of a subtyped module."),
    ("integer", "Validates that a number is an integer."),
    ("positive", "Validates that a number is positive."),
    ("negative", "Validates that a number is negative."),
    ("min", "Validates that a value is greater than or equal to a minimum."),
    ("max", "Validates that a value is less than or equal to a maximum."),
    ("range", "Validates that a value is within a specified range."),
    ("true", "Validates that a boolean is true."),
    ("false", "Validates that a boolean is false."),
    ("keys", "Gets the keys of an object type."),
    ("values", "Gets the values of an object type."),
    ("entries", "Gets the entries of an object type."),
    ("length", "Validates the length of an array."),
    ("items", "Validates the items of an array."),
];
