use typetable::Schema;

#[derive(Schema)]
pub struct Named {
    pub age: u32,
}

fn main() {
    let named = Named { age: 1 };
    let _ = named.age;
}
