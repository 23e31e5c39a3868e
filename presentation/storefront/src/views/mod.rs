pub mod cart_view;
pub mod catalog_view;
pub mod form_view;
pub mod product_view;
pub mod surface;

use business::domain::product::model::Product;

/// Price label shared by every view.
pub fn format_cost(product: &Product) -> String {
    match product.cost() {
        Some(cost) => format!("{} synapses", cost),
        None => "priceless".to_string(),
    }
}

#[cfg(test)]
pub mod test_support;
