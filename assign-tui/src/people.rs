//! The fixed list of people a form can be assigned to.

use formbind::Choice;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u32,
    pub name: &'static str,
}

impl Choice for Person {
    fn label(&self) -> &str {
        self.name
    }
}

pub static PEOPLE: [Person; 10] = [
    Person { id: 1, name: "Wade Cooper" },
    Person { id: 2, name: "Arlene Mccoy" },
    Person { id: 3, name: "Devon Webb" },
    Person { id: 4, name: "Tom Cook" },
    Person { id: 5, name: "Tanya Fox" },
    Person { id: 6, name: "Hellen Schmidt" },
    Person { id: 7, name: "Caroline Schultz" },
    Person { id: 8, name: "Mason Heaney" },
    Person { id: 9, name: "Claudie Smitham" },
    Person { id: 10, name: "Emil Schaefer" },
];
