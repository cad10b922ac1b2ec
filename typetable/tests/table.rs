use typetable::{Cell, Error, Index, Schema, Table, Visitor};

#[derive(Debug, Clone, PartialEq, Schema)]
pub struct Sample(i32, char, String);

fn sample() -> (Table<Sample>, Index, Index) {
    let mut table = Table::new();
    let a = table.insert_with((1, '2', String::from("3")));
    let b = table.insert_with((4, '5', String::from("6")));
    (table, a, b)
}

fn indices(table: &Table<Sample>) -> Vec<Index> {
    let mut indices = Vec::new();
    table.select_column::<i32>(|index, _| indices.push(index));
    indices
}

#[test]
pub fn test_scenario() {
    let (mut table, a, b) = sample();
    assert_eq!((a, b), (0, 1));
    assert_eq!(table.count(), 2);
    assert_eq!(table.select::<i32>(a), Some(&1));

    assert!(table.remove(a));
    assert_eq!(table.count(), 1);
    assert_eq!(table.select::<i32>(a), None);

    let c = table.insert();
    assert_eq!(c, 2);

    let mut calls = Vec::new();
    table.project::<(i32, char)>(|index, value| calls.push(format!("{index} {value:?}")));
    assert_eq!(calls, ["1 4", "1 '5'", "2 0", "2 '\\0'"]);
}

#[test]
pub fn test_headers() {
    let (mut table, a, _) = sample();
    let headers = table.headers().to_vec();
    assert_eq!(headers, ["i32", "char", "String"]);

    table.remove(a);
    table.insert();
    table.update(0, 'z');
    assert_eq!(table.headers(), headers.as_slice());
}

#[test]
pub fn test_index_monotonic() {
    let mut table = Table::<Sample>::new();
    let mut last = None;
    for round in 0..20 {
        let index = table.insert();
        if let Some(last) = last {
            assert!(index > last);
        }
        last = Some(index);
        if round % 3 == 0 {
            assert!(table.remove(index));
        }
    }
    assert_eq!(last, Some(19));
    assert_eq!(table.insert(), 20);
}

#[test]
pub fn test_sorted_after_removals() {
    let mut table = Table::<Sample>::new();
    for i in 0..10 {
        table.insert_with((i,));
    }
    for index in [7, 0, 3, 9] {
        assert!(table.remove(index));
    }
    table.insert();

    let indices = indices(&table);
    assert_eq!(indices, [1, 2, 4, 5, 6, 8, 10]);
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
pub fn test_update_select() {
    let (mut table, a, b) = sample();

    assert!(table.update(b, String::from("six")));
    assert!(table.update(b, -4));
    assert_eq!(table.select::<String>(b).map(String::as_str), Some("six"));
    assert_eq!(table.select::<i32>(b), Some(&-4));
    assert_eq!(table.select::<char>(b), Some(&'5'));

    assert_eq!(table.row(a), Some(&Sample(1, '2', String::from("3"))));
    assert_eq!(table.try_update(a, 'q'), Ok('2'));
}

#[test]
pub fn test_insert_order_independent() {
    let mut table = Table::<Sample>::new();
    let a = table.insert_with(('x', String::from("y"), 3));
    let b = table.insert_with((3, 'x', String::from("y")));
    assert_eq!(table.row(a), table.row(b));

    let c = table.insert_with((String::from("only"),));
    assert_eq!(table.row(c), Some(&Sample(0, '\0', String::from("only"))));

    let d = table.insert_with(());
    assert_eq!(table.row(d), Some(&Sample::blank()));
}

#[test]
pub fn test_not_found() {
    let (mut table, a, b) = sample();
    assert!(table.remove(a));
    let before = table.clone();

    for index in [a, 2, 100] {
        assert!(!table.contains(index));
        assert_eq!(table.select::<i32>(index), None);
        assert!(!table.update(index, 9));
        assert!(!table.remove(index));
        assert_eq!(table.take(index), None);
        assert_eq!(table.try_update(index, 'k'), Err(Error::NotFound { index }));
        assert_eq!(table.try_remove(index), Err(Error::NotFound { index }));
    }

    assert_eq!(table.count(), 1);
    assert_eq!(table.row(b), before.row(b));
    assert_eq!(table.insert(), 2);
}

#[test]
pub fn test_take() {
    let (mut table, a, b) = sample();
    assert_eq!(table.take(b), Some(Sample(4, '5', String::from("6"))));
    assert_eq!(table.take(b), None);
    assert_eq!(table.try_remove(a), Ok(Sample(1, '2', String::from("3"))));
    assert!(table.is_empty());
}

#[test]
pub fn test_error_display() {
    assert_eq!(Error::NotFound { index: 42 }.to_string(), "no row with index 42");
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(Index, String)>,
}

impl Visitor for Recorder {
    fn visit<T: Cell>(&mut self, index: Index, value: &T) {
        self.calls.push((index, format!("{value:?}")));
    }
}

#[test]
pub fn test_projection_cardinality() {
    let mut table = Table::<Sample>::new();
    for i in 0..5i32 {
        table.insert_with((i, char::from(b'a' + i as u8)));
    }
    table.remove(2);

    let mut recorder = Recorder::default();
    table.visit::<(String, i32, String, char), _>(&mut recorder);
    assert_eq!(recorder.calls.len(), table.count() * 4);

    let expected: Vec<(Index, String)> = [0, 1, 3, 4]
        .into_iter()
        .flat_map(|index| {
            let letter = char::from(b'a' + index as u8);
            [
                (index, String::from("\"\"")),
                (index, index.to_string()),
                (index, String::from("\"\"")),
                (index, format!("{letter:?}")),
            ]
        })
        .collect();
    assert_eq!(recorder.calls, expected);
}

#[test]
pub fn test_projection_downcast() {
    let (table, _, _) = sample();
    let mut total = 0;
    let mut text = String::new();
    table.project::<(i32, String)>(|_, value| {
        if let Some(number) = value.downcast_ref::<i32>() {
            total += number;
        } else if let Some(string) = value.downcast_ref::<String>() {
            text.push_str(string);
        }
    });
    assert_eq!(total, 5);
    assert_eq!(text, "36");
}

#[test]
pub fn test_empty_projection() {
    let table = Table::<Sample>::default();
    let mut calls = 0;
    table.project::<(i32, char, String)>(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    x: i64,
    y: i64,
}

#[derive(Debug, Schema)]
pub struct Marker(Position, bool);

#[test]
pub fn test_project_custom_column() {
    let mut table = Table::<Marker>::new();
    let index = table.insert_with((Position { x: 3, y: -1 },));
    table.insert_with((true,));

    let mut positions = Vec::new();
    table.project::<(Position,)>(|index, value| {
        positions.push((index, value.downcast_ref::<Position>().cloned()));
    });
    assert_eq!(
        positions,
        [(index, Some(Position { x: 3, y: -1 })), (1, Some(Position::default()))]
    );
}

#[derive(Debug, Schema)]
#[schema(table = TaggedTable)]
pub struct Tagged<T: std::fmt::Debug + Default + 'static>(Vec<T>, u8);

#[test]
pub fn test_generic_schema_alias() {
    let mut table = TaggedTable::<i32>::new();
    assert_eq!(table.headers(), ["Vec<i32>", "u8"]);

    let index = table.insert_with((vec![1, 2], 3u8));
    assert!(table.update(index, vec![5]));
    assert_eq!(table.select::<Vec<i32>>(index), Some(&vec![5]));
    assert_eq!(table.select::<u8>(index), Some(&3));
}
