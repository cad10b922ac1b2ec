use typetable::Schema;

#[derive(Schema)]
pub struct Twice(u32, String, u32);

fn main() {
    let row = Twice(1, String::new(), 2);
    let _ = (row.0, row.1, row.2);
}
