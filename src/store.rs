use crate::models::Dish;

/// The in-memory menu. Insertion order is display order; duplicate names are allowed.
///
/// Readers only ever get copies through [`MenuStore::snapshot`], so a view built
/// from a snapshot stays consistent even if the store changes afterwards.
#[derive(Debug, Default, Clone)]
pub struct MenuStore {
    dishes: Vec<Dish>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    /// Removes the dish at `index`. Out-of-range indexes are ignored.
    pub fn delete_at(&mut self, index: usize) -> Option<Dish> {
        if index < self.dishes.len() {
            Some(self.dishes.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.dishes.clear();
    }

    /// Replaces the whole menu, e.g. after loading a file.
    pub fn replace(&mut self, dishes: Vec<Dish>) {
        self.dishes = dishes;
    }

    pub fn snapshot(&self) -> Vec<Dish> {
        self.dishes.clone()
    }

    pub fn get(&self, index: usize) -> Option<&Dish> {
        self.dishes.get(index)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl From<Vec<Dish>> for MenuStore {
    fn from(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}
