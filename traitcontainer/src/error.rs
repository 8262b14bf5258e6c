use error_chain::error_chain;

error_chain! {
    errors {
        OutOfRange(index: usize, length: usize) {
            description("index out of range")
            display("index {} is out of range for a sequence of length {}", index, length)
        }

        EmptyContainer {
            description("the container is empty")
            display("could not access element, the container is empty")
        }

        // The offset is `None` for a null cursor.
        InvalidCursor(offset: Option<isize>) {
            description("the cursor does not belong to the container")
            display("invalid cursor at offset {:?}, it does not lie within the bounds of the container", offset)
        }
    }
}
