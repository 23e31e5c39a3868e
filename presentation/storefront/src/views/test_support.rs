use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

pub fn product(id: &str, name: &str, cost: Option<u64>) -> Product {
    Product::new(NewProductProps {
        id: ProductId::new(id),
        kind: "другое".to_string(),
        name: name.to_string(),
        cost,
        description: "Description".to_string(),
        image: "/Shell.svg".to_string(),
    })
}
