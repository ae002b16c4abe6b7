use arrow::datatypes::{DataType as ArrowDataType, TimeUnit as ArrowTimeUnit};
use colmeta_arrow::{from_arrow_schema, to_arrow_schema};
use colmeta_core::{DataType, Field, KeyValueMetadata, Schema, TimeUnit};

#[test]
fn to_arrow_schema_converts_nested_types() {
    let schema = Schema::new(vec![
        Field::nullable("n", DataType::Null),
        Field::new("b", DataType::Bool, false),
        Field::new("i32", DataType::Int32, false),
        Field::nullable("s", DataType::String),
        Field::nullable("bytes", DataType::Binary),
        Field::nullable("fixed", DataType::fixed_size_binary(12).unwrap()),
        Field::nullable("ts", DataType::timestamp_tz(TimeUnit::Nanosecond, "UTC")),
        Field::nullable("t32", DataType::time32(TimeUnit::Millisecond).unwrap()),
        Field::nullable("dec", DataType::decimal(12, 2).unwrap()),
        Field::nullable("list", DataType::list(DataType::Int32)),
        Field::nullable(
            "st",
            DataType::Struct(vec![
                Field::new("c1", DataType::Int32, false),
                Field::nullable("c2", DataType::String),
            ]),
        ),
    ]);

    let arrow_schema = to_arrow_schema(&schema).unwrap();
    assert_eq!(arrow_schema.fields().len(), 11);
    assert_eq!(arrow_schema.field(0).data_type(), &ArrowDataType::Null);
    assert!(!arrow_schema.field(1).is_nullable());
    assert_eq!(arrow_schema.field(2).data_type(), &ArrowDataType::Int32);
    assert_eq!(arrow_schema.field(3).data_type(), &ArrowDataType::Utf8);
    assert_eq!(arrow_schema.field(4).data_type(), &ArrowDataType::Binary);
    assert_eq!(
        arrow_schema.field(5).data_type(),
        &ArrowDataType::FixedSizeBinary(12)
    );
    assert_eq!(
        arrow_schema.field(6).data_type(),
        &ArrowDataType::Timestamp(ArrowTimeUnit::Nanosecond, Some("UTC".into()))
    );
    assert_eq!(
        arrow_schema.field(7).data_type(),
        &ArrowDataType::Time32(ArrowTimeUnit::Millisecond)
    );
    assert_eq!(
        arrow_schema.field(8).data_type(),
        &ArrowDataType::Decimal128(12, 2)
    );

    match arrow_schema.field(9).data_type() {
        ArrowDataType::List(item) => {
            assert_eq!(item.name(), "item");
            assert_eq!(item.data_type(), &ArrowDataType::Int32);
        }
        other => panic!("unexpected data type: {other:?}"),
    }
    match arrow_schema.field(10).data_type() {
        ArrowDataType::Struct(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0].name(), "c1");
        }
        other => panic!("unexpected data type: {other:?}"),
    }
}

#[test]
fn metadata_survives_the_round_trip() {
    let metadata: KeyValueMetadata = [(&b"origin"[..], &b"sensor"[..])].into_iter().collect();
    let schema = Schema::new_with_metadata(
        vec![Field::nullable("foo", DataType::Int32).add_metadata(metadata.clone())],
        metadata.clone(),
    );

    let arrow_schema = to_arrow_schema(&schema).unwrap();
    assert_eq!(arrow_schema.metadata()["origin"], "sensor");
    assert_eq!(arrow_schema.field(0).metadata()["origin"], "sensor");

    let back = from_arrow_schema(&arrow_schema).unwrap();
    assert_eq!(back, schema);
    assert_eq!(back.metadata, Some(metadata.clone()));
    assert_eq!(back.fields[0].metadata, Some(metadata));
}

#[test]
fn non_utf8_metadata_is_rejected() {
    let metadata: KeyValueMetadata = [(vec![0xffu8, 0xfe], b"v".to_vec())].into_iter().collect();
    let schema = Schema::new_with_metadata(vec![Field::nullable("foo", DataType::Int32)], metadata);
    assert!(to_arrow_schema(&schema).is_err());
}

#[test]
fn dictionary_maps_to_index_value_pair() {
    let dict = DataType::dictionary(
        DataType::Int16,
        DataType::String,
        vec!["foo".to_string()],
        false,
    )
    .unwrap();
    let schema = Schema::new(vec![Field::nullable("d", dict)]);

    let arrow_schema = to_arrow_schema(&schema).unwrap();
    assert_eq!(
        arrow_schema.field(0).data_type(),
        &ArrowDataType::Dictionary(
            Box::new(ArrowDataType::Int16),
            Box::new(ArrowDataType::Utf8)
        )
    );

    // Materialized values are display-only and do not cross into Arrow.
    let back = from_arrow_schema(&arrow_schema).unwrap();
    match &back.fields[0].data_type {
        DataType::Dictionary(d) => assert!(d.values.is_empty()),
        other => panic!("unexpected data type: {other:?}"),
    }
}

#[test]
fn out_of_range_decimals_are_rejected_not_truncated() {
    // Valid core descriptors wider than Decimal128 must error, never
    // convert to a narrowed precision or scale.
    let wide_precision = Schema::new(vec![Field::nullable(
        "d",
        DataType::decimal(300, 2).unwrap(),
    )]);
    assert!(to_arrow_schema(&wide_precision).is_err());

    let over_max_precision = Schema::new(vec![Field::nullable(
        "d",
        DataType::decimal(39, 2).unwrap(),
    )]);
    assert!(to_arrow_schema(&over_max_precision).is_err());

    let wide_scale = Schema::new(vec![Field::nullable(
        "d",
        DataType::decimal(12, 200).unwrap(),
    )]);
    assert!(to_arrow_schema(&wide_scale).is_err());

    // 38 is the Decimal128 maximum and still converts exactly.
    let at_max = Schema::new(vec![Field::nullable(
        "d",
        DataType::decimal(38, 2).unwrap(),
    )]);
    assert_eq!(
        to_arrow_schema(&at_max).unwrap().field(0).data_type(),
        &ArrowDataType::Decimal128(38, 2)
    );
}

#[test]
fn duplicate_metadata_keys_collapse_to_the_first_pair() {
    let metadata: KeyValueMetadata = [(&b"k"[..], &b"first"[..]), (&b"k"[..], &b"second"[..])]
        .into_iter()
        .collect();
    assert_eq!(metadata.get(b"k"), Some(&b"first"[..]));

    let schema =
        Schema::new_with_metadata(vec![Field::nullable("foo", DataType::Int32)], metadata);
    let arrow_schema = to_arrow_schema(&schema).unwrap();
    assert_eq!(arrow_schema.metadata()["k"], "first");
}

#[test]
fn unsupported_arrow_types_are_reported() {
    let arrow_schema = arrow::datatypes::Schema::new(vec![arrow::datatypes::Field::new(
        "large",
        ArrowDataType::LargeUtf8,
        true,
    )]);
    assert!(from_arrow_schema(&arrow_schema).is_err());
}
