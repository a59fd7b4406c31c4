use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    /// Overwrites every mutable field of the stored product.
    ///
    /// # Fields Updated
    /// - `name`, `price`, `category`, `stock`, `is_discontinued`
    fn on_update(&mut self, incoming: Product) {
        self.name = incoming.name;
        self.price = incoming.price;
        self.category = incoming.category;
        self.stock = incoming.stock;
        self.is_discontinued = incoming.is_discontinued;
    }
}
