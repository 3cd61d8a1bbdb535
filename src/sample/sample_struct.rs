use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use super::feature_struct::Feature;


/// Struct `Sample` holds a batch of observations
/// in a column-major (dense/sparse) format,
/// together with a target value per row.
/// A target equal to `NaN` ([`MISSING`](crate::sample::MISSING))
/// marks a row whose class label is unknown.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership of the given pair
    /// `data` and `target`.
    /// Null entries of `target` are read as missing labels.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();

        let target = target.f64()
            .expect("The target is not a dtype f64")
            .into_iter()
            .map(|y| y.unwrap_or(f64::NAN))
            .collect::<Vec<_>>();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist
    /// or contains an unparsable cell.
    ///
    /// An empty cell or a cell holding `?` is read as
    /// a missing value.
    /// Missing values are only meaningful in the target column;
    /// see [`Sample::set_target`].
    ///
    /// If the CSV file has no header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    pub fn from_csv<P>(file: P, has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read a CSV from [`BufReader`].
    pub fn from_reader<R>(reader: BufReader<R>, mut has_header: bool)
        -> io::Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines();

        let mut features = Vec::new();
        if has_header {
            let line = lines.next().unwrap();
            features = line?.split(',')
                .map(Feature::dense)
                .collect::<Vec<_>>();
        }
        let mut n_sample = 0_usize;

        for (ln, line) in lines.enumerate() {
            let line = line?;

            // If the header does not exist,
            // construct a dummy header from the first line.
            if !has_header {
                let xs = line.split(',')
                    .map(|x| parse_cell(x, ln))
                    .collect::<io::Result<Vec<_>>>()?;

                let n_feature = xs.len();
                features = (1..=n_feature).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::dense(name)
                    })
                    .collect::<Vec<_>>();

                for (feat, x) in features.iter_mut().zip(xs) {
                    feat.append((0, x));
                }

                has_header = true;
                n_sample += 1;
                continue;
            }

            for (i, x) in line.split(',').enumerate() {
                let x = parse_cell(x, ln)?;
                features[i].append((0, x));
            }

            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Read a SVMLight format file to `Sample`.
    ///
    /// Each line of a SVMLight format file has the following form:
    /// ```txt
    /// y index:value index:value
    /// ```
    /// where `y` is the target label of type `f64`,
    /// `index` is the feature index, and `value` is the value
    /// at the feature.
    /// SVMLight files carry a label on every line,
    /// so samples read this way have no missing label.
    pub(super) fn from_svmlight<P: AsRef<Path>>(file: P)
        -> io::Result<Self>
    {
        let mut features: Vec<Feature> = Vec::new();
        let mut target = Vec::new();
        let mut n_sample = 0_usize;

        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        for line in lines {
            let line = line?;
            let mut words = line.split_whitespace();
            // The first word corresponds to the target value.
            let y = words.next()
                .unwrap()
                .trim()
                .parse::<f64>()
                .map_err(|_| io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Failed to parse the target value.",
                ))?;
            target.push(y);

            for word in words {
                let (i, x) = index_and_feature(word)?;

                while features.len() <= i {
                    let k = features.len() + 1;
                    let name = format!("Feat. [{k}]");
                    features.push(Feature::sparse(name, 0));
                }

                features[i].append((n_sample, x));
            }
            n_sample += 1;
        }

        let n_feature = features.len();

        features.iter_mut()
            .for_each(|feat| {
                feat.set_size(n_sample);
            });

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Returns the slice of target values.
    /// Missing labels hold `NaN`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .unwrap_or_else(|| {
                panic!("The target class \"{target}\" does not exist")
            });

        let target = self.features.remove(pos).into_vals();
        self.target = target;
        self.n_feature -= 1;

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        self
    }


    /// Overwrite the target value of the `row`-th row.
    /// This method is how labels obtained from an oracle
    /// get folded back into the sample.
    pub fn set_label(&mut self, row: usize, label: f64) {
        self.target_is_specified();
        assert!(row < self.n_sample);
        self.target[row] = label;
    }


    /// Returns the pair of the number of observations and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Number of rows with a known label.
    pub fn n_labeled(&self) -> usize {
        self.target.iter()
            .filter(|y| !y.is_nan())
            .count()
    }


    /// Number of rows whose label is missing.
    pub fn n_unlabeled(&self) -> usize {
        self.target.len() - self.n_labeled()
    }


    /// Returns the canonical class list:
    /// the sorted, deduplicated labels observed in `self.target`.
    /// Missing labels are ignored.
    /// All committee members emit probability vectors
    /// aligned with this list.
    pub fn classes(&self) -> Vec<f64> {
        let mut classes = self.target.iter()
            .copied()
            .filter(|y| !y.is_nan())
            .collect::<Vec<_>>();
        classes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        classes.dedup();
        classes
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    pub(crate) fn target_is_specified(&self) {
        let n_sample = self.shape().0;

        if n_sample != self.target.len() {
            panic!(
                "The target class is not specified.\n\
                 Use `Sample::set_target(\"Column Name\")`."
            );
        }
    }


    fn append(&mut self, row: usize, feat: Vec<f64>, y: f64) {
        self.features.par_iter_mut()
            .zip(feat)
            .for_each(|(col, f)| {
                col.append((row, f));
            });
        self.target.push(y);
    }


    /// Collect the rows listed in `ix` into a new sample.
    /// Duplicated indices are allowed,
    /// so a bootstrap resample is just a `subsample`
    /// over indices drawn with replacement.
    pub fn subsample<T>(&self, ix: T) -> Self
        where T: AsRef<[usize]>
    {
        self.target_is_specified();
        let ix = ix.as_ref();
        let n_feature = self.n_feature;
        let size = ix.len();

        let mut sub = Self {
            name_to_index: self.name_to_index.clone(),
            features: vec![Feature::sparse("dummy", 0); n_feature],
            target: Vec::with_capacity(size),
            n_sample: size,
            n_feature,
        };

        for (name, &i) in self.name_to_index.iter() {
            sub.features[i] = if self.features[i].is_sparse() {
                Feature::sparse(name.to_string(), size)
            } else {
                Feature::dense(name.to_string())
            };
        }

        for (row, &orig) in ix.iter().enumerate() {
            let (x, y) = self.at(orig);
            sub.append(row, x, y);
        }

        sub
    }
}


/// Parse one CSV cell.
/// An empty cell or `?` marks a missing value.
fn parse_cell(cell: &str, line: usize) -> io::Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "?" {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "The file contains a non-numerical value. \
                 Got {cell:?} in line {line}."
            ),
        ))
}


/// Parse the following type of `str` to the pair of `(usize, f64)`:
/// `index:value`, where `index: usize` and `value: f64`.
fn index_and_feature(word: &str) -> io::Result<(usize, f64)> {
    let mut i_x = word.split(':');
    let i = i_x.next()
        .unwrap()
        .trim()
        .parse::<usize>()
        .map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            "Failed to parse an index.",
        ))?;
    let x = i_x.next()
        .unwrap()
        .trim()
        .parse::<f64>()
        .map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            "Failed to parse a feature value.",
        ))?;

    Ok((i, x))
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}
