pub(crate) mod ground_truth;
pub(crate) mod preview;
pub(crate) mod sink;
pub(crate) mod tensor;
