use std::io::BufReader;

use qbag::{Error, Sample};


/// Tests for splitting a partially labeled sample.
#[cfg(test)]
pub mod partition_tests {
    use super::*;


    fn pool() -> Sample {
        // Rows 1, 3 and 5 carry a missing label.
        let csv = "\
            x,y,class\n\
            1.0,2.0,0\n\
            3.0,4.0,?\n\
            5.0,6.0,1\n\
            7.0,8.0,\n\
            9.0,0.0,1\n\
            2.0,1.0,?\n";
        Sample::from_reader(BufReader::new(csv.as_bytes()), true)
            .unwrap()
            .set_target("class")
    }


    #[test]
    fn partition_splits_by_missing_label() {
        let sample = pool();
        assert_eq!(sample.shape(), (6, 2));
        assert_eq!(sample.n_labeled(), 3);
        assert_eq!(sample.n_unlabeled(), 3);

        let partition = sample.partition().unwrap();

        assert_eq!(partition.labeled.shape().0, 3);
        assert_eq!(partition.unlabeled.shape().0, 3);
        assert_eq!(partition.labeled_index, vec![0, 2, 4]);
        assert_eq!(partition.unlabeled_index, vec![1, 3, 5]);
    }


    #[test]
    fn partition_preserves_row_order_and_values() {
        let sample = pool();
        let partition = sample.partition().unwrap();

        // Second labeled row is the original row 2.
        let (xs, y) = partition.labeled.at(1);
        assert_eq!(xs, vec![5.0, 6.0]);
        assert_eq!(y, 1.0);

        // Third unlabeled row is the original row 5.
        let (xs, y) = partition.unlabeled.at(2);
        assert_eq!(xs, vec![2.0, 1.0]);
        assert!(y.is_nan());
    }


    #[test]
    fn fully_labeled_sample_cannot_be_partitioned() {
        let csv = "\
            x,class\n\
            1.0,0\n\
            2.0,1\n";
        let sample = Sample::from_reader(
                BufReader::new(csv.as_bytes()), true
            )
            .unwrap()
            .set_target("class");

        let e = sample.partition().unwrap_err();
        assert_eq!(e, Error::EmptyPartition { labeled: 2, unlabeled: 0 });
    }


    #[test]
    fn fully_unlabeled_sample_cannot_be_partitioned() {
        let csv = "\
            x,class\n\
            1.0,?\n\
            2.0,?\n";
        let sample = Sample::from_reader(
                BufReader::new(csv.as_bytes()), true
            )
            .unwrap()
            .set_target("class");

        let e = sample.partition().unwrap_err();
        assert_eq!(e, Error::EmptyPartition { labeled: 0, unlabeled: 2 });
    }


    #[test]
    fn relabeling_moves_a_row_across_the_split() {
        let mut sample = pool();
        sample.set_label(3, 0.0);

        let partition = sample.partition().unwrap();
        assert_eq!(partition.labeled_index, vec![0, 2, 3, 4]);
        assert_eq!(partition.unlabeled_index, vec![1, 5]);
    }
}
