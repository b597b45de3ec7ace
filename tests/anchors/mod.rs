mod show_anchors_between_files;
