use typetable::Schema;

#[derive(Schema)]
pub struct Empty();

fn main() {
    let _ = Empty();
}
