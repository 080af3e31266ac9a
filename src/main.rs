use gloo::console::error;
use obscura::{mount_app, ROOT_ELEMENT_ID};

fn main() {
    let root = gloo::utils::document().get_element_by_id(ROOT_ELEMENT_ID);

    if let Err(err) = mount_app(root) {
        let message = err.to_string();
        error!(message.clone());
        wasm_bindgen::throw_str(&message);
    }
}
