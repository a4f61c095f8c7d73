use placer::{Annotation, ShapeKind};
use serde::{Serialize, Serializer, ser::SerializeMap};

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonAnnotation {
    #[serde(rename = "box")]
    pub bbox: [i32; 4],
    pub category: &'static str,
}

impl From<&Annotation> for JsonAnnotation {
    fn from(a: &Annotation) -> Self {
        Self {
            bbox: a.bbox,
            category: a.category.name(),
        }
    }
}

/// Image filename -> annotations, serialized as one JSON object in insertion order.
#[derive(Debug, Default)]
pub struct Dataset {
    entries: Vec<(String, Vec<Annotation>)>,
}

impl Dataset {
    pub fn push(&mut self, image: String, annotations: Vec<Annotation>) {
        self.entries.push((image, annotations));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, anns)| anns)
            .filter(|a| a.category == kind)
            .count()
    }
}

impl FromIterator<(String, Vec<Annotation>)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Annotation>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, anns) in &self.entries {
            let objects: Vec<JsonAnnotation> = anns.iter().map(JsonAnnotation::from).collect();
            map.serialize_entry(name, &objects)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(bbox: [i32; 4], category: ShapeKind) -> Annotation {
        Annotation { bbox, category }
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut ds = Dataset::default();
        ds.push("10.png".into(), vec![ann([1, 2, 3, 4], ShapeKind::Circle)]);
        ds.push("2.png".into(), vec![]);
        ds.push("1.png".into(), vec![ann([5, 6, 9, 9], ShapeKind::Rectangle)]);

        let json = serde_json::to_string(&ds).unwrap();
        assert_eq!(
            json,
            r#"{"10.png":[{"box":[1,2,3,4],"category":"circle"}],"2.png":[],"1.png":[{"box":[5,6,9,9],"category":"rectangle"}]}"#
        );
    }

    #[test]
    fn lookup_and_counts() {
        let ds: Dataset = vec![
            ("0.png".to_string(), vec![ann([0, 0, 4, 4], ShapeKind::Circle)]),
            (
                "1.png".to_string(),
                vec![
                    ann([0, 0, 4, 4], ShapeKind::Circle),
                    ann([5, 5, 8, 9], ShapeKind::Rectangle),
                ],
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.count(ShapeKind::Circle), 2);
        assert_eq!(ds.count(ShapeKind::Rectangle), 1);
    }
}
