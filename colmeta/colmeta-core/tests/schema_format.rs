use colmeta_core::{DataType, Field, Schema, format_schema};

#[test]
fn list_fields_keep_child_lines_and_indentation() {
    let schema = Schema::new(vec![
        Field::nullable("foo", DataType::Int32),
        Field::nullable("bar", DataType::String),
        Field::nullable("baz", DataType::list(DataType::Int8)),
    ]);

    let expected = "\
foo: int32
bar: string
baz: list<item: int8>
  child 0, item: int8";
    assert_eq!(schema.to_string(), expected);
}

#[test]
fn dictionary_fields_list_their_values() {
    let dict = DataType::dictionary(
        DataType::Int16,
        DataType::String,
        vec!["foo".to_string(), "bar".to_string(), "baz".to_string()],
        false,
    )
    .unwrap();
    let schema = Schema::new(vec![
        Field::nullable("one", dict),
        Field::nullable("two", DataType::Int32),
    ]);

    let expected = "\
one: dictionary<values=string, indices=int16, ordered=0>
  dictionary: [\"foo\", \"bar\", \"baz\"]
two: int32";
    assert_eq!(schema.to_string(), expected);
}

#[test]
fn nested_structs_recurse_with_deeper_indentation() {
    let inner = DataType::Struct(vec![Field::nullable("c", DataType::String)]);
    let outer = DataType::Struct(vec![
        Field::nullable("a", DataType::Float64),
        Field::nullable("b", inner),
    ]);
    let schema = Schema::new(vec![Field::nullable("root", outer)]);

    let expected = "\
root: struct<a: float64, b: struct<c: string>>
  child 0, a: float64
  child 1, b: struct<c: string>
    child 0, c: string";
    assert_eq!(schema.to_string(), expected);
}

#[test]
fn display_matches_format_schema() {
    let schema = Schema::new(vec![Field::nullable("a", DataType::Int32)]);
    assert_eq!(schema.to_string(), format_schema(&schema));
}

#[test]
fn empty_schema_renders_empty_string() {
    assert_eq!(Schema::new(vec![]).to_string(), "");
}
