#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seglist::{
    harness::{apply, ListOps, Op},
    SegmentedList,
};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    fragment: u8,
    ops: Vec<Op<u8>>,
}

fuzz_target!(|input: FuzzInput| {
    let mut model: Vec<u8> = Vec::new();
    let Ok(mut list) = SegmentedList::with_fragment(i64::from(input.fragment)) else {
        return;
    };

    for op in input.ops {
        let op = op.fold_index(ListOps::len(&model));
        let expected = apply(&mut model, &op);
        let actual = apply(&mut list, &op);

        assert_eq!(expected, actual, "diverged on {op}");
        assert_eq!(list.len(), model.len());
        assert!(list.validate_invariants().is_ok(), "broken after {op}");
    }

    assert_eq!(list.to_vec(), model);
});
