use crate::domain::shared::value_objects::ProductId;

/// A catalog item. Immutable once constructed.
///
/// Equality is by `id` only: two values carrying the same identifier are the
/// same product, whatever their other fields say.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    kind: String,
    name: String,
    cost: Option<u64>,
    description: String,
    image: String,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub kind: String,
    pub name: String,
    /// `None` for items sold without a price.
    pub cost: Option<u64>,
    pub description: String,
    pub image: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: props.id,
            kind: props.kind,
            name: props.name,
            cost: props.cost,
            description: props.description,
            image: props.image,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product category, e.g. "софт-скил".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Option<u64> {
        self.cost
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_priceless(&self) -> bool {
        self.cost.is_none()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}
