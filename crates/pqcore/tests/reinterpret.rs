use pqcore::{
    ByteArrayDescriptor, ByteCast, ColumnPath, FixedLenByteArrayDescriptor, Int96, PhysicalType,
};

#[test]
fn int96_page_buffer() {
    // Two timestamps back to back, plus a partial third value.
    let mut page = Vec::new();
    page.extend_from_slice(&Int96::from_parts(0, 2440588).to_le_bytes());
    page.extend_from_slice(&Int96::from_parts(3_600_000_000_000, 2440589).to_le_bytes());
    page.extend_from_slice(&[0xAA; 5]);

    let vals = Int96::cast_from_bytes(&page);
    assert_eq!(2, vals.len());
    assert_eq!("1970-01-01T00:00:00.000000000Z", vals[0].to_string());
    assert_eq!("1970-01-02T01:00:00.000000000Z", vals[1].to_string());
    assert_eq!(&page[..24], Int96::cast_to_bytes(vals));
}

#[test]
fn int96_mutation_visible_in_page() {
    let mut page = vec![0u8; Int96::bytes_required(3)];

    for (idx, v) in Int96::cast_from_bytes_mut(&mut page).iter_mut().enumerate() {
        v.set_julian_day(2440588 + idx as u32);
    }

    assert_eq!(2440590u32.to_le_bytes(), page[32..36]);
    let dates: Vec<_> = Int96::cast_from_bytes(&page)
        .iter()
        .map(|v| v.to_datetime().unwrap().format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(vec!["1970-01-01", "1970-01-02", "1970-01-03"], dates);
}

#[test]
fn byte_array_descriptors_over_heap() {
    let heap = b"helloparquet";
    let descs = [ByteArrayDescriptor::new(0, 5), ByteArrayDescriptor::new(5, 7)];

    let raw = ByteArrayDescriptor::cast_to_bytes(&descs).to_vec();
    assert_eq!(PhysicalType::ByteArray.byte_size() * 2, raw.len());

    let vals: Vec<_> = ByteArrayDescriptor::cast_from_bytes(&raw)
        .iter()
        .map(|d| d.resolve(heap).unwrap().as_str().unwrap())
        .collect();
    assert_eq!(vec!["hello", "parquet"], vals);
}

#[test]
fn fixed_len_descriptors_rewritten_in_place() {
    let heap = b"aaaabbbbcccc";
    let mut raw = vec![0u8; FixedLenByteArrayDescriptor::bytes_required(2)];

    {
        let descs = FixedLenByteArrayDescriptor::cast_from_bytes_mut(&mut raw);
        descs[0] = FixedLenByteArrayDescriptor::new(8, 4);
        descs[1] = FixedLenByteArrayDescriptor::new(4, 4);
    }

    let vals: Vec<_> = FixedLenByteArrayDescriptor::cast_from_bytes(&raw)
        .iter()
        .map(|d| d.resolve(heap, 4).unwrap().to_text())
        .collect();
    assert_eq!(vec!["cccc", "bbbb"], vals);
}

#[test]
fn nested_paths() {
    let root = ColumnPath::root();
    let list = root.extend("tags").extend("list");
    let element = list.extend("element");

    assert_eq!("tags.list", list.to_string());
    assert_eq!("tags.list.element", element.to_string());
    assert_eq!(element, ColumnPath::parse("tags.list.element"));
}
